use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use asterix_types::{Block, Record};

use crate::cat034::Cat034Transform;
use crate::cat048::Cat048Transform;
use crate::cat255::Cat255Transform;
use crate::error::TransformError;
use crate::model::SemanticModel;

/// Turns records of one category into a [`SemanticModel`].
///
/// Implementations match on the field indices they understand and skip
/// the rest, so a record carrying fields the model does not cover still
/// transforms.
pub trait CategoryTransform: Send + Sync {
    fn category(&self) -> u8;

    /// # Errors
    ///
    /// [`TransformError::InvalidEnumValue`] or
    /// [`TransformError::UnexpectedShape`] when a field's contents cannot
    /// be interpreted.
    fn transform(&self, record: &Record) -> Result<SemanticModel, TransformError>;
}

/// Category → transform dispatch table.
///
/// ```text
///   TransformRegistry
///   ├── 34  → Cat034Transform
///   ├── 48  → Cat048Transform
///   └── 255 → Cat255Transform
/// ```
#[derive(Default)]
pub struct TransformRegistry {
    transforms: HashMap<u8, Box<dyn CategoryTransform>>,
}

impl TransformRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of built-in transforms.
    pub fn standard() -> &'static TransformRegistry {
        static STANDARD: OnceLock<TransformRegistry> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut transforms: HashMap<u8, Box<dyn CategoryTransform>> = HashMap::new();
            transforms.insert(34, Box::new(Cat034Transform));
            transforms.insert(48, Box::new(Cat048Transform));
            transforms.insert(255, Box::new(Cat255Transform));
            TransformRegistry { transforms }
        })
    }

    /// Add a transform under its own category.
    ///
    /// # Errors
    ///
    /// [`TransformError::DuplicateTransform`] if the category is taken.
    pub fn register(&mut self, transform: impl CategoryTransform + 'static) -> Result<(), TransformError> {
        let category = transform.category();
        if self.transforms.contains_key(&category) {
            return Err(TransformError::DuplicateTransform { category });
        }
        self.transforms.insert(category, Box::new(transform));
        Ok(())
    }

    #[must_use]
    pub fn get(&self, category: u8) -> Option<&dyn CategoryTransform> {
        self.transforms.get(&category).map(Box::as_ref)
    }

    /// Transform one record of the given category.
    ///
    /// # Errors
    ///
    /// [`TransformError::NoTransform`] if nothing is registered for the
    /// category, otherwise whatever the transform returns.
    pub fn transform(&self, category: u8, record: &Record) -> Result<SemanticModel, TransformError> {
        self.get(category)
            .ok_or(TransformError::NoTransform { category })?
            .transform(record)
    }

    /// Transform every record of a block, one result per record.
    #[must_use]
    pub fn transform_block(&self, block: &Block) -> Vec<Result<SemanticModel, TransformError>> {
        block
            .records
            .iter()
            .map(|record| self.transform(block.category, record))
            .collect()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut categories: Vec<u8> = self.transforms.keys().copied().collect();
        categories.sort_unstable();
        f.debug_struct("TransformRegistry")
            .field("categories", &categories)
            .finish()
    }
}
