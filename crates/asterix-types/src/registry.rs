use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::TypeError;
use crate::profile::CategoryProfile;
use crate::{cat034, cat048, cat255};

/// Category → profile table.
///
/// A registry is built once and then only read. It holds nothing but
/// layout data, so it is `Send + Sync` and one instance can serve any
/// number of concurrent decode calls.
///
/// ```text
///   ProfileRegistry
///   ├── 34  → CategoryProfile (monoradar service messages)
///   ├── 48  → CategoryProfile (monoradar target reports)
///   └── 255 → CategoryProfile (STR surveillance cards)
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<u8, CategoryProfile>,
}

impl ProfileRegistry {
    /// The process-wide registry of built-in profiles, created on first
    /// use.
    pub fn standard() -> &'static ProfileRegistry {
        static STANDARD: OnceLock<ProfileRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut profiles = HashMap::new();
            for profile in standard_profiles() {
                profiles.insert(profile.category, profile);
            }
            ProfileRegistry { profiles }
        })
    }

    /// Start an empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[must_use]
    pub fn get(&self, category: u8) -> Option<&CategoryProfile> {
        self.profiles.get(&category)
    }

    #[must_use]
    pub fn contains(&self, category: u8) -> bool {
        self.profiles.contains_key(&category)
    }

    /// Registered categories, ascending.
    #[must_use]
    pub fn categories(&self) -> Vec<u8> {
        let mut cats: Vec<u8> = self.profiles.keys().copied().collect();
        cats.sort_unstable();
        cats
    }
}

/// The built-in profiles, in category order.
#[must_use]
pub fn standard_profiles() -> Vec<CategoryProfile> {
    vec![cat034::profile(), cat048::profile(), cat255::profile()]
}

/// Builder for a custom [`ProfileRegistry`].
///
/// ```rust
/// use asterix_types::{CategoryProfile, FieldSpec, ProfileRegistry};
///
/// let registry = ProfileRegistry::builder()
///     .register(CategoryProfile::new(
///         1,
///         "custom",
///         vec![FieldSpec::fixed(1, "I001/010", 2)],
///     ))
///     .unwrap()
///     .build();
/// assert!(registry.contains(1));
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    profiles: HashMap<u8, CategoryProfile>,
}

impl RegistryBuilder {
    /// Add every built-in profile.
    ///
    /// # Errors
    ///
    /// [`TypeError::DuplicateCategory`] if one was already registered.
    pub fn with_standard(self) -> Result<Self, TypeError> {
        standard_profiles()
            .into_iter()
            .try_fold(self, RegistryBuilder::register)
    }

    /// Validate and add one profile.
    ///
    /// # Errors
    ///
    /// - [`TypeError::DuplicateCategory`] if the category is taken.
    /// - Any error from [`CategoryProfile::validate`].
    pub fn register(mut self, profile: CategoryProfile) -> Result<Self, TypeError> {
        if self.profiles.contains_key(&profile.category) {
            return Err(TypeError::DuplicateCategory {
                category: profile.category,
            });
        }
        profile.validate()?;
        self.profiles.insert(profile.category, profile);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> ProfileRegistry {
        ProfileRegistry {
            profiles: self.profiles,
        }
    }
}
