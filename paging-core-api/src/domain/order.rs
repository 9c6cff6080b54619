use std::fmt;
use std::str::FromStr;

use crate::error::{PagingError, PagingResult};

/// Direction of a single sort criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn is_ascending(&self) -> bool {
        matches!(self, Direction::Asc)
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::Desc)
    }

    fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PagingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(Direction::Asc),
            "DESC" | "DESCENDING" => Ok(Direction::Desc),
            _ => Err(PagingError::invalid(format!("Invalid sort direction: {s}"))),
        }
    }
}

/// A sorting criterion: the property to sort by and its direction.
///
/// The property is guaranteed to be non-blank.
///
/// # Example
/// ```
/// use paging_core_api::{Direction, Order};
///
/// let order = Order::descending("created_at").unwrap();
/// assert_eq!(order.property(), "created_at");
/// assert_eq!(order.direction(), Direction::Desc);
/// assert!(Order::ascending("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    property: String,
    direction: Direction,
}

impl Order {
    /// Create a new order
    ///
    /// # Errors
    /// * `PagingError::InvalidArgument` - if `property` is empty or whitespace only
    pub fn new(property: impl Into<String>, direction: Direction) -> PagingResult<Self> {
        let property = property.into();
        if property.trim().is_empty() {
            return Err(PagingError::invalid("Property name must not be blank"));
        }
        Ok(Self { property, direction })
    }

    pub fn ascending(property: impl Into<String>) -> PagingResult<Self> {
        Self::new(property, Direction::Asc)
    }

    pub fn descending(property: impl Into<String>) -> PagingResult<Self> {
        Self::new(property, Direction::Desc)
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property, self.direction)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Direction, Order};

    impl Serialize for Direction {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for Direction {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let value_str = String::deserialize(deserializer)?;
            value_str.parse().map_err(D::Error::custom)
        }
    }

    #[derive(Deserialize)]
    struct RawOrder {
        property: String,
        #[serde(default)]
        direction: Direction,
    }

    impl Serialize for Order {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Order", 2)?;
            state.serialize_field("property", &self.property)?;
            state.serialize_field("direction", &self.direction)?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for Order {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawOrder::deserialize(deserializer)?;
            Order::new(raw.property, raw.direction).map_err(D::Error::custom)
        }
    }
}
