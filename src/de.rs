//! Typed extraction of BON documents through Serde.
//!
//! Parsing always produces a [`Value`]. This module lets that value drive any
//! `Deserialize` implementation, so a document can be read straight into
//! application types.
//!
//! ## Mapping
//!
//! | BON | Serde data model |
//! |-----|------------------|
//! | string | string |
//! | integer | `i64` |
//! | float | `f64` |
//! | list | sequence |
//! | object | map (nodes in source order, duplicate keys included) |
//! | bare node | single-entry map |
//!
//! BON has no null literal, so `Option` fields are `Some` whenever the key is
//! present and `None` when it is missing.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_bon::from_str;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i64, y: f64 }
//!
//! let point: Point = from_str("{x: 1; y: 2.5;}").unwrap();
//! assert_eq!(point, Point { x: 1, y: 2.5 });
//! ```

use crate::{Error, Node, Number, Object, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Deserializes an owned [`Value`].
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_string(s),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            Value::Node(node) => {
                visitor.visit_map(MapDeserializer::new(Object::from(vec![*node])))
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let node = match self.value {
            Value::String(s) => return visitor.visit_enum(s.into_deserializer()),
            Value::Node(node) => *node,
            Value::Object(obj) if obj.len() == 1 => match obj.into_iter().next() {
                Some(node) => node,
                None => return Err(Error::custom("Expected enum variant")),
            },
            _ => return Err(Error::custom("Expected enum")),
        };
        visitor.visit_enum(EnumDeserializer { node })
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: std::vec::IntoIter<Node>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(obj: Object) -> Self {
        MapDeserializer {
            iter: obj.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(Node { key, value }) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    node: Node,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let Node { key, value } = self.node;
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(key)))?;
        Ok((variant, VariantDeserializer { value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Err(Error::custom("Expected unit variant as a plain string"))
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}
