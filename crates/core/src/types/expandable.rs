//! Expandable references.
//!
//! Most fields that point at another resource arrive as a bare ID string.
//! When the caller passes `expand[]=<field>`, the same field arrives as the
//! full nested object instead. [`Expandable`] holds either shape.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor, value::MapAccessDeserializer};
use serde::{Deserialize, Deserializer};

/// A resource that can appear as the expanded side of an [`Expandable`].
pub trait Object: Sized {
    /// The typed ID of the resource.
    type Id: fmt::Debug + Clone + Eq + From<String> + AsRef<str>;

    /// The resource's own ID.
    fn id(&self) -> &Self::Id;

    /// Decode the full object representation.
    ///
    /// Types whose `Deserialize` impl itself accepts a bare ID override this
    /// to call their field-by-field decoder directly.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's error if the object does not match the schema.
    fn deserialize_object<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        Self: Deserialize<'de>,
    {
        Self::deserialize(deserializer)
    }
}

/// A reference that is either an unexpanded ID or the expanded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expandable<T: Object> {
    /// Bare ID string.
    Id(T::Id),
    /// Fully expanded nested object.
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// The referenced ID, whichever shape arrived.
    #[must_use]
    pub fn id(&self) -> &T::Id {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.id(),
        }
    }

    /// Whether the full object is present.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The expanded object, if present.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    /// Consume the reference and return the expanded object, if present.
    #[must_use]
    pub fn into_object(self) -> Option<T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(*object),
        }
    }
}

impl<T: Object> From<T> for Expandable<T> {
    fn from(object: T) -> Self {
        Self::Object(Box::new(object))
    }
}

impl<'de, T> Deserialize<'de> for Expandable<T>
where
    T: Object + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExpandableVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for ExpandableVisitor<T>
        where
            T: Object + Deserialize<'de>,
        {
            type Value = Expandable<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ID string or an expanded object")
            }

            fn visit_str<E>(self, id: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Expandable::Id(id.to_owned().into()))
            }

            fn visit_string<E>(self, id: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Expandable::Id(id.into()))
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize_object(MapAccessDeserializer::new(map))
                    .map(|object| Expandable::Object(Box::new(object)))
            }
        }

        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}
