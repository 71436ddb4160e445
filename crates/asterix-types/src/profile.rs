use crate::error::TypeError;

/// Highest field index a presence field can name (36 bytes × 7 bits).
pub const MAX_FIELD_INDEX: u8 = 252;

/// The layout of one data item, as declared by a category's UAP.
///
/// ```text
/// ┌─────────────────────┬──────────────────────────────────────────┐
/// │ Shape               │ Bytes read                               │
/// ├─────────────────────┼──────────────────────────────────────────┤
/// │ Fixed(L)            │ exactly L                                │
/// │ Extended{P, S}      │ P, then S per set low bit                │
/// │ Repetitive(U)       │ 1 count byte R, then R × U               │
/// │ Compound(nested)    │ nested presence field, then sub-items    │
/// │ Explicit            │ 1 length byte N, then N                  │
/// └─────────────────────┴──────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Fixed(u8),
    Extended { primary: u8, secondary: u8 },
    Repetitive(u8),
    Compound(Vec<FieldSpec>),
    Explicit,
}

/// One row of a category profile: field index, item reference, shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub index: u8,
    /// Data item reference, e.g. `"I048/010"`.
    pub name: &'static str,
    pub shape: Shape,
}

impl FieldSpec {
    #[must_use]
    pub fn fixed(index: u8, name: &'static str, len: u8) -> Self {
        Self {
            index,
            name,
            shape: Shape::Fixed(len),
        }
    }

    #[must_use]
    pub fn extended(index: u8, name: &'static str, primary: u8, secondary: u8) -> Self {
        Self {
            index,
            name,
            shape: Shape::Extended { primary, secondary },
        }
    }

    #[must_use]
    pub fn repetitive(index: u8, name: &'static str, unit_len: u8) -> Self {
        Self {
            index,
            name,
            shape: Shape::Repetitive(unit_len),
        }
    }

    #[must_use]
    pub fn compound(index: u8, name: &'static str, nested: Vec<FieldSpec>) -> Self {
        Self {
            index,
            name,
            shape: Shape::Compound(nested),
        }
    }

    #[must_use]
    pub fn explicit(index: u8, name: &'static str) -> Self {
        Self {
            index,
            name,
            shape: Shape::Explicit,
        }
    }
}

/// Look up a spec in an ascending list of field specs.
#[must_use]
pub fn find_field(fields: &[FieldSpec], index: u8) -> Option<&FieldSpec> {
    fields
        .binary_search_by_key(&index, |f| f.index)
        .ok()
        .map(|pos| &fields[pos])
}

/// The user application profile (UAP) of one category: which field
/// index maps to which data item and how that item is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryProfile {
    pub category: u8,
    /// Edition of the category document the table follows.
    pub edition: &'static str,
    /// Ascending by `index`.
    pub fields: Vec<FieldSpec>,
}

impl CategoryProfile {
    #[must_use]
    pub fn new(category: u8, edition: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            category,
            edition,
            fields,
        }
    }

    #[must_use]
    pub fn field(&self, index: u8) -> Option<&FieldSpec> {
        find_field(&self.fields, index)
    }

    /// Check that the table can drive the decoder: strictly ascending
    /// indices in `1..=252`, and no shape that would read zero bytes.
    /// Compound sub-profiles are checked recursively.
    ///
    /// # Errors
    ///
    /// [`TypeError::InvalidFieldIndex`], [`TypeError::UnsortedFields`]
    /// or [`TypeError::ZeroLength`] for the first offending field.
    pub fn validate(&self) -> Result<(), TypeError> {
        validate_fields(self.category, &self.fields)
    }
}

fn validate_fields(category: u8, fields: &[FieldSpec]) -> Result<(), TypeError> {
    let mut previous = 0u8;
    for spec in fields {
        if spec.index == 0 || spec.index > MAX_FIELD_INDEX {
            return Err(TypeError::InvalidFieldIndex {
                category,
                index: spec.index,
            });
        }
        if spec.index <= previous {
            return Err(TypeError::UnsortedFields {
                category,
                index: spec.index,
            });
        }
        previous = spec.index;

        let zero = match &spec.shape {
            Shape::Fixed(len) | Shape::Repetitive(len) => *len == 0,
            Shape::Extended { primary, secondary } => *primary == 0 || *secondary == 0,
            Shape::Compound(nested) => {
                validate_fields(category, nested)?;
                nested.is_empty()
            }
            Shape::Explicit => false,
        };
        if zero {
            return Err(TypeError::ZeroLength {
                category,
                name: spec.name,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(fields: Vec<FieldSpec>) -> CategoryProfile {
        CategoryProfile::new(1, "test", fields)
    }

    #[test]
    fn lookup_by_index() {
        let p = profile(vec![
            FieldSpec::fixed(1, "I001/010", 2),
            FieldSpec::explicit(9, "I001/SP"),
        ]);
        assert_eq!(p.field(9).unwrap().shape, Shape::Explicit);
        assert!(p.field(2).is_none());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_unsorted_fields() {
        let p = profile(vec![
            FieldSpec::fixed(2, "b", 1),
            FieldSpec::fixed(2, "c", 1),
        ]);
        assert_eq!(
            p.validate(),
            Err(TypeError::UnsortedFields {
                category: 1,
                index: 2
            })
        );
    }

    #[test]
    fn rejects_index_zero() {
        let p = profile(vec![FieldSpec::fixed(0, "a", 1)]);
        assert!(matches!(
            p.validate(),
            Err(TypeError::InvalidFieldIndex { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_zero_length_in_nested_compound() {
        let p = profile(vec![FieldSpec::compound(
            1,
            "I001/130",
            vec![FieldSpec::repetitive(1, "RDS", 0)],
        )]);
        assert_eq!(
            p.validate(),
            Err(TypeError::ZeroLength {
                category: 1,
                name: "RDS"
            })
        );
    }
}
