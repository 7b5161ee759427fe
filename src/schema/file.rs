//! Datastore file resource schema

use serde::{Deserialize, Serialize};

use super::{AttributeSchema, ResourceSchema};

/// Attribute selecting the target datacenter
pub const ATTR_DATACENTER: &str = "datacenter";

/// Attribute selecting the target datastore
pub const ATTR_DATASTORE: &str = "datastore";

/// Attribute holding the local path uploaded on create
pub const ATTR_SOURCE_FILE: &str = "source_file";

/// Attribute holding the remote path within the datastore
pub const ATTR_DESTINATION_FILE: &str = "destination_file";

/// Declared attribute schema for the file resource
///
/// `destination_file` is the only attribute that can change in place (via
/// a remote rename); every other change replaces the remote object.
pub fn file_schema() -> ResourceSchema {
    ResourceSchema::from([
        (
            ATTR_DATACENTER,
            AttributeSchema {
                required: false,
                force_new: true,
            },
        ),
        (
            ATTR_DATASTORE,
            AttributeSchema {
                required: false,
                force_new: true,
            },
        ),
        (
            ATTR_SOURCE_FILE,
            AttributeSchema {
                required: true,
                force_new: true,
            },
        ),
        (
            ATTR_DESTINATION_FILE,
            AttributeSchema {
                required: true,
                force_new: false,
            },
        ),
    ])
}

/// Validated descriptor for a single lifecycle call
///
/// Constructed fresh from declared state on every invocation and never
/// persisted; the host engine only keeps the opaque identity key.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileSpec {
    /// Target datacenter; empty selects the host default
    #[serde(default)]
    pub datacenter: String,

    /// Target datastore name
    pub datastore: String,

    /// Local path uploaded on create; write-only, never read back
    pub source_file: String,

    /// Remote path within the datastore; identity-bearing
    pub destination_file: String,
}

impl FileSpec {
    /// Identity key the host engine persists for this resource instance
    ///
    /// Two descriptors with identical keys refer to the same remote object.
    pub fn id(&self) -> String {
        format!(
            "[{}] {}/{}",
            self.datastore, self.datacenter, self.destination_file
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_key_format() {
        let spec = FileSpec {
            datacenter: "dc1".to_string(),
            datastore: "ds1".to_string(),
            source_file: "/tmp/image.iso".to_string(),
            destination_file: "a/b.txt".to_string(),
        };
        assert_eq!(spec.id(), "[ds1] dc1/a/b.txt");
    }

    #[test]
    fn identity_key_with_default_datacenter() {
        let spec = FileSpec {
            datacenter: String::new(),
            datastore: "ds1".to_string(),
            source_file: "/tmp/image.iso".to_string(),
            destination_file: "a/b.txt".to_string(),
        };
        assert_eq!(spec.id(), "[ds1] /a/b.txt");
    }

    #[test]
    fn only_destination_is_updatable_in_place() {
        let schema = file_schema();
        assert!(!schema[ATTR_DESTINATION_FILE].force_new);
        assert!(schema[ATTR_DESTINATION_FILE].required);
        assert!(schema[ATTR_SOURCE_FILE].force_new);
        assert!(schema[ATTR_SOURCE_FILE].required);
        assert!(schema[ATTR_DATACENTER].force_new);
        assert!(!schema[ATTR_DATACENTER].required);
        assert!(schema[ATTR_DATASTORE].force_new);
    }
}
