// cff-core/src/action.rs
//! Static description of the action, as the host tool lists it.
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionInfo {
    pub key: &'static str,
    pub description: &'static str,
    pub optional: bool,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    /// Environment variable consulted when the option is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_fallback: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub return_value: &'static str,
    pub authors: &'static [&'static str],
    pub options: &'static [OptionInfo],
}

pub const ACTION: ActionInfo = ActionInfo {
    name: "common_gitlab_fastfile",
    description: "Gets the requested file, saves it into ./fastlane/imports and return the path",
    details: "Gets the requested file, saves it into ./fastlane/imports and return the path",
    return_value: "The path to a file within ./fastlane/imports with requested common fastfile",
    authors: &["Pawel Szymanski"],
    options: &[
        OptionInfo {
            key: "file",
            description: "Path to the file within repository",
            optional: false,
            value_type: "String",
            env_fallback: None,
        },
        OptionInfo {
            key: "version",
            description: "Version of the file [branch, tag, commit]",
            optional: false,
            value_type: "String",
            env_fallback: None,
        },
        OptionInfo {
            key: "repository",
            description: "Gitlab repository ID, e.g. 26259886 or group/subgroup/repository",
            optional: true,
            value_type: "String",
            env_fallback: Some(cff_common::config::REPOSITORY_ENV),
        },
    ],
};

impl ActionInfo {
    /// Nothing in the action depends on the target platform.
    pub fn is_supported(&self, _platform: &str) -> bool {
        true
    }

    pub fn option(&self, key: &str) -> Option<&OptionInfo> {
        self.options.iter().find(|option| option.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_and_version_are_mandatory() {
        assert!(!ACTION.option("file").unwrap().optional);
        assert!(!ACTION.option("version").unwrap().optional);
        let repository = ACTION.option("repository").unwrap();
        assert!(repository.optional);
        assert_eq!(repository.env_fallback, Some("GITLAB_FASTFILES_REPOSITORY"));
    }

    #[test]
    fn supports_every_platform() {
        for platform in ["ios", "android", "mac"] {
            assert!(ACTION.is_supported(platform));
        }
    }

    #[test]
    fn serializes_option_type_under_its_host_name() {
        let json = serde_json::to_value(ACTION).unwrap();
        assert_eq!(json["options"][0]["type"], "String");
        assert_eq!(json["options"][0]["key"], "file");
        assert!(json["options"][0].get("env_fallback").is_none());
        assert_eq!(json["authors"][0], "Pawel Szymanski");
    }
}
