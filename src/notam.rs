use std::collections::HashMap;
use std::fmt;

use crate::geo::LatLon;

pub mod parse;
pub mod resolve;

/// Elements of a notice that the resolver reads.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Series,
    Number,
    Year,
    Code23,
    Coordinates,
    Radius,
    StartValidity,
    EndValidity,
    ItemE,
    ItemF,
    ItemG,
}

impl Field {
    pub fn from_tag(tag: &[u8]) -> Option<Field> {
        Some(match tag {
            b"Series" => Field::Series,
            b"Number" => Field::Number,
            b"Year" => Field::Year,
            b"Code23" => Field::Code23,
            b"Coordinates" => Field::Coordinates,
            b"Radius" => Field::Radius,
            b"StartValidity" => Field::StartValidity,
            b"EndValidity" => Field::EndValidity,
            b"ItemE" => Field::ItemE,
            b"ItemF" => Field::ItemF,
            b"ItemG" => Field::ItemG,
            _ => return None,
        })
    }

    /// Code23 lives inside the QLine element; everything else is a direct child.
    pub fn found_at_any_depth(self) -> bool {
        self == Field::Code23
    }
}

impl From<Field> for &str {
    fn from(x: Field) -> &'static str {
        match x {
            Field::Series => "Series",
            Field::Number => "Number",
            Field::Year => "Year",
            Field::Code23 => "Code23",
            Field::Coordinates => "Coordinates",
            Field::Radius => "Radius",
            Field::StartValidity => "StartValidity",
            Field::EndValidity => "EndValidity",
            Field::ItemE => "ItemE",
            Field::ItemF => "ItemF",
            Field::ItemG => "ItemG",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

/// The text content of one notice element, keyed by field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawNotice {
    fields: HashMap<Field, String>,
}

impl RawNotice {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Records a field unless an earlier element already supplied it.
    pub fn insert(&mut self, field: Field, text: String) {
        self.fields.entry(field).or_insert(text);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RestrictionKind {
    DangerArea,
    RestrictedArea,
}

impl RestrictionKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RD" => Some(RestrictionKind::DangerArea),
            "RT" => Some(RestrictionKind::RestrictedArea),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            RestrictionKind::DangerArea => "RD",
            RestrictionKind::RestrictedArea => "RT",
        }
    }
}

impl From<RestrictionKind> for &str {
    fn from(x: RestrictionKind) -> &'static str {
        match x {
            RestrictionKind::DangerArea => "Danger Area",
            RestrictionKind::RestrictedArea => "Restricted Area",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str((*self).into())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon(Vec<LatLon>),
    Circle { center: LatLon, radius_nm: f64 },
}

impl Shape {
    /// Shape discriminant: `polygon` or `circle`.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Polygon(_) => "polygon",
            Shape::Circle { .. } => "circle",
        }
    }
}

/// A Danger or Restricted Area notice with its geometry.
///
/// Validity and altitude limits are passed through exactly as the feed
/// wrote them (`SFC`, `FL195`, `2410010800`...).
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(private, setter(into))]
pub struct Restriction {
    pub id: String,
    pub kind: RestrictionKind,
    pub valid_from: String,
    pub valid_to: String,
    pub lower: String,
    pub upper: String,
    pub description: String,
    #[builder(default)]
    pub shape: Option<Shape>,
}

impl Restriction {
    pub fn shape_kind(&self) -> Option<&'static str> {
        self.shape.as_ref().map(Shape::kind)
    }
}
