/// A property entry as the listing service sends it, before any validation.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RawProperty {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A managed property, validated at the service boundary.
///
/// The listing service is not trusted to send well-formed records, so this
/// type can only be built through [`Property::new`] / `TryFrom<RawProperty>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    id: String,
    name: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropertyError {
    #[error("Property entry has a blank id")]
    BlankId,
    #[error("Property '{id}' has a blank display name")]
    BlankName { id: String },
}

impl Property {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, PropertyError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(PropertyError::BlankId);
        }
        if name.trim().is_empty() {
            return Err(PropertyError::BlankName { id });
        }

        Ok(Self { id, name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<RawProperty> for Property {
    type Error = PropertyError;

    fn try_from(raw: RawProperty) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name)
    }
}

/// Validates a whole payload, reporting the index of the first bad entry.
pub fn validate_all(raw: Vec<RawProperty>) -> Result<Vec<Property>, (usize, PropertyError)> {
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| Property::try_from(entry).map_err(|why| (index, why)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_entries() {
        let property = Property::new("p1", "Lakeview").unwrap();

        assert_eq!(property.id(), "p1");
        assert_eq!(property.name(), "Lakeview");
    }

    #[test]
    fn rejects_blank_id() {
        assert_eq!(Property::new("  ", "Lakeview"), Err(PropertyError::BlankId));
        assert_eq!(Property::new("", "Lakeview"), Err(PropertyError::BlankId));
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Property::new("p1", " "),
            Err(PropertyError::BlankName {
                id: String::from("p1")
            })
        );
    }

    #[test]
    fn decodes_the_wire_shape() {
        let raw: Vec<RawProperty> = serde_json::from_str(
            r#"[{"id":"p1","name":"Lakeview"},{"id":"p2","name":"Bay Tower"}]"#,
        )
        .unwrap();

        let properties = validate_all(raw).unwrap();

        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].name(), "Lakeview");
        assert_eq!(properties[1].id(), "p2");
    }

    #[test]
    fn extra_fields_on_the_wire_are_ignored() {
        let raw: Vec<RawProperty> = serde_json::from_str(
            r#"[{"id":"p1","name":"Lakeview","timezone":"America/Chicago","created_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        assert_eq!(validate_all(raw).unwrap().len(), 1);
    }

    #[test]
    fn a_missing_field_fails_validation_not_decoding() {
        let raw: Vec<RawProperty> = serde_json::from_str(r#"[{"id":"p1"}]"#).unwrap();

        assert_eq!(
            validate_all(raw),
            Err((
                0,
                PropertyError::BlankName {
                    id: String::from("p1")
                }
            ))
        );
    }

    #[test]
    fn reports_the_index_of_the_first_bad_entry() {
        let raw = vec![
            RawProperty {
                id: String::from("p1"),
                name: String::from("Lakeview"),
            },
            RawProperty {
                id: String::new(),
                name: String::from("Bay Tower"),
            },
        ];

        assert_eq!(validate_all(raw), Err((1, PropertyError::BlankId)));
    }
}
