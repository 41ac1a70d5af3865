//! Property path resolution
//!
//! Reads a property from a bean by path. A path is a sequence of segments
//! separated by `.`; each segment is a property name optionally followed by
//! one or more `[index]` suffixes:
//!
//! | Path | Meaning |
//! |------|---------|
//! | `name` | simple property |
//! | `lines[2]` | third element of an indexed property |
//! | `owner.address` | property of a nested bean |
//! | `grid[0][1].label` | all of the above |
//!
//! Each segment is checked against the class chain registered in the
//! [`TypeContext`] before the bean's read accessor is invoked.

use beanprobe_types::TypeContext;

use crate::bean::Bean;
use crate::error::{AccessResult, IntrospectionError, PropertyAccessError};
use crate::value::Value;

/// One parsed path segment
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment<'p> {
    /// Segment text as written, indices included
    raw: &'p str,
    /// Property name
    name: &'p str,
    /// Index suffixes, applied left to right
    indices: Vec<usize>,
}

fn parse_path(path: &str) -> AccessResult<Vec<Segment<'_>>> {
    let invalid = |reason: &str| PropertyAccessError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("empty path"));
    }

    path.split('.')
        .map(|raw| parse_segment(raw).map_err(invalid))
        .collect()
}

fn parse_segment(raw: &str) -> Result<Segment<'_>, &'static str> {
    let (name, mut rest) = match raw.find('[') {
        Some(i) => raw.split_at(i),
        None => (raw, ""),
    };
    if name.is_empty() {
        return Err("empty property name");
    }
    if name.contains(']') {
        return Err("unexpected ']'");
    }

    let mut indices = Vec::new();
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[').ok_or("expected '[' after index")?;
        let close = inner.find(']').ok_or("unterminated index")?;
        let index = inner[..close]
            .parse::<usize>()
            .map_err(|_| "index is not a non-negative integer")?;
        indices.push(index);
        rest = &inner[close + 1..];
    }

    Ok(Segment { raw, name, indices })
}

/// Read a property, possibly nested and/or indexed, from a bean
pub fn get_property(ctx: &TypeContext, bean: &dyn Bean, path: &str) -> AccessResult<Value> {
    let segments = parse_path(path)?;
    let (first, rest) = segments
        .split_first()
        .ok_or_else(|| PropertyAccessError::InvalidPath {
            path: path.to_string(),
            reason: "empty path".to_string(),
        })?;

    let mut value = read_segment(ctx, bean, first)?;
    let mut consumed = first.raw.len();
    for segment in rest {
        let prefix = &path[..consumed];
        let nested = match value {
            Value::Bean(nested) => nested,
            Value::Null => {
                return Err(PropertyAccessError::NullNested {
                    path: prefix.to_string(),
                })
            }
            other => {
                return Err(PropertyAccessError::NotABean {
                    path: prefix.to_string(),
                    found: other.kind_name(),
                })
            }
        };
        value = read_segment(ctx, &*nested, segment)?;
        consumed += 1 + segment.raw.len();
    }

    Ok(value)
}

/// Check that a property can be read, discarding its value
pub fn probe(ctx: &TypeContext, bean: &dyn Bean, path: &str) -> AccessResult<()> {
    get_property(ctx, bean, path).map(drop)
}

/// Read a property, reporting failure as an [`IntrospectionError`]
///
/// For callers that treat an unreadable property as a reflection problem
/// rather than a value-level failure.
pub fn require_property(
    ctx: &TypeContext,
    bean: &dyn Bean,
    path: &str,
) -> Result<Value, IntrospectionError> {
    get_property(ctx, bean, path).map_err(|source| IntrospectionError::PropertyAccess {
        property: path.to_string(),
        source,
    })
}

fn read_segment(ctx: &TypeContext, bean: &dyn Bean, segment: &Segment<'_>) -> AccessResult<Value> {
    let property = ctx
        .find_property(bean.class_id(), segment.name)
        .ok_or_else(|| PropertyAccessError::no_such_property(segment.name))?;
    if !property.readable {
        return Err(PropertyAccessError::NoReadMethod {
            property: segment.name.to_string(),
        });
    }

    let mut value = bean.read_property(segment.name)?;
    for &index in &segment.indices {
        value = index_into(value, segment.name, index)?;
    }
    Ok(value)
}

fn index_into(value: Value, property: &str, index: usize) -> AccessResult<Value> {
    match value {
        Value::List(mut items) => {
            let len = items.len();
            if index < len {
                Ok(items.swap_remove(index))
            } else {
                Err(PropertyAccessError::IndexOutOfBounds {
                    property: property.to_string(),
                    index,
                    len,
                })
            }
        }
        other => Err(PropertyAccessError::NotIndexed {
            property: property.to_string(),
            found: other.kind_name(),
        }),
    }
}
