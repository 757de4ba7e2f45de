use custom_error::custom_error;

use super::*;
use crate::polygon::extract_polygon;

custom_error! {pub Skip
    MissingField{field: Field} = "missing <{field}> element",
    BadRadius{value: String} = "radius `{value}` is not a number",
    Incomplete{reason: String} = "incomplete restriction: {reason}"
}

/// What became of one notice.
#[derive(Debug)]
pub enum Resolution {
    Restriction(Restriction),
    /// Not a Danger or Restricted Area.
    NotRestriction,
    /// Looked like a restriction but couldn't be read.
    Skipped(Skip),
}

impl Resolution {
    pub fn restriction(self) -> Option<Restriction> {
        match self {
            Resolution::Restriction(r) => Some(r),
            _ => None,
        }
    }
}

fn require(notice: &RawNotice, field: Field) -> Result<&str, Skip> {
    notice.get(field).ok_or(Skip::MissingField { field })
}

/// Polygon from the description when it holds one, else a circle from the
/// center and radius fields.
fn resolve_shape(notice: &RawNotice, description: &str) -> Result<Option<Shape>, Skip> {
    if let Some(points) = extract_polygon(description) {
        return Ok(Some(Shape::Polygon(points)));
    }

    match (notice.get(Field::Coordinates), notice.get(Field::Radius)) {
        (Some(center), Some(radius)) => {
            let radius_nm: f64 = radius.trim().parse().map_err(|_| Skip::BadRadius {
                value: radius.to_owned(),
            })?;
            Ok(LatLon::from_notam(center.trim()).map(|center| Shape::Circle { center, radius_nm }))
        }
        _ => Ok(None),
    }
}

fn build_restriction(notice: &RawNotice, kind: RestrictionKind) -> Result<Restriction, Skip> {
    let id = format!(
        "{}{}/{}",
        require(notice, Field::Series)?,
        require(notice, Field::Number)?,
        require(notice, Field::Year)?
    );
    let description = require(notice, Field::ItemE)?;

    let mut restriction = RestrictionBuilder::default();
    restriction
        .id(id)
        .kind(kind)
        .valid_from(require(notice, Field::StartValidity)?)
        .valid_to(require(notice, Field::EndValidity)?)
        .lower(require(notice, Field::ItemF)?)
        .upper(require(notice, Field::ItemG)?)
        .description(description);

    if let Some(shape) = resolve_shape(notice, description)? {
        restriction.shape(shape);
    }

    restriction.build().map_err(|reason| Skip::Incomplete { reason })
}

pub fn resolve(notice: &RawNotice) -> Resolution {
    let kind = match notice.get(Field::Code23).and_then(RestrictionKind::from_code) {
        Some(kind) => kind,
        None => return Resolution::NotRestriction,
    };

    match build_restriction(notice, kind) {
        Ok(restriction) => Resolution::Restriction(restriction),
        Err(skip) => Resolution::Skipped(skip),
    }
}
