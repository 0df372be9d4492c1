// ABOUTME: Integration tests for credential file parsing.
// ABOUTME: Covers required keys, quoting, optional value normalization, and missing files.

mod support;

use oecli::ErrorKind;
use oecli::config::*;
use std::path::PathBuf;

mod parsing {
    use super::*;

    #[test]
    fn parse_full_credentials() {
        let creds = Credentials::from_ini(
            r#"
[credentials]
address = "192.168.0.220"
port = "22"
username = "cli"
password = "admin"
key_filename = "/root/.ssh/id_rsa"
"#,
        )
        .unwrap();
        assert_eq!(creds.address, "192.168.0.220");
        assert_eq!(creds.port, 22);
        assert_eq!(creds.username, "cli");
        assert_eq!(creds.password.as_deref(), Some("admin"));
        assert_eq!(creds.key_path, Some(PathBuf::from("/root/.ssh/id_rsa")));
    }

    #[test]
    fn unquoted_values_are_accepted() {
        let creds =
            Credentials::from_ini("[credentials]\naddress=nas\nport=2222\nusername=root\n")
                .unwrap();
        assert_eq!(creds.address, "nas");
        assert_eq!(creds.port, 2222);
    }

    #[test]
    fn empty_optional_values_become_none() {
        let creds = Credentials::from_ini(
            "[credentials]\naddress = nas\nport = 22\nusername = root\npassword = \"\"\nkey_filename =\n",
        )
        .unwrap();
        assert_eq!(creds.password, None);
        assert_eq!(creds.key_path, None);
    }

    #[test]
    fn absent_optional_keys_become_none() {
        let creds =
            Credentials::from_ini("[credentials]\naddress = nas\nport = 22\nusername = root\n")
                .unwrap();
        assert_eq!(creds.password, None);
        assert_eq!(creds.key_path, None);
    }

    #[test]
    fn other_sections_are_ignored() {
        let creds = Credentials::from_ini(
            "[other]\naddress = wrong\n[credentials]\naddress = nas\nport = 22\nusername = root\n",
        )
        .unwrap();
        assert_eq!(creds.address, "nas");
    }
}

mod failures {
    use super::*;

    fn kind_of(content: &str) -> ErrorKind {
        Credentials::from_ini(content).unwrap_err().kind()
    }

    #[test]
    fn missing_section() {
        assert_eq!(
            kind_of("[other]\naddress = nas\nport = 22\nusername = root\n"),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn each_required_key_is_enforced() {
        let full = ["address = nas", "port = 22", "username = root"];
        for skipped in 0..full.len() {
            let body: Vec<_> = full
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skipped)
                .map(|(_, line)| *line)
                .collect();
            let content = format!("[credentials]\n{}\n", body.join("\n"));
            assert_eq!(kind_of(&content), ErrorKind::Configuration, "{content}");
        }
    }

    #[test]
    fn missing_username_names_the_key() {
        let err = Credentials::from_ini("[credentials]\naddress = nas\nport = 22\n").unwrap_err();
        assert!(err.to_string().contains("username"));
    }

    #[test]
    fn non_numeric_port() {
        assert_eq!(
            kind_of("[credentials]\naddress = nas\nport = ssh\nusername = root\n"),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn port_out_of_range() {
        assert_eq!(
            kind_of("[credentials]\naddress = nas\nport = 70000\nusername = root\n"),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::load(&dir.path().join("absent.conf")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

mod source {
    use super::*;

    #[test]
    fn file_source_reads_given_path() {
        let (_dir, path) = support::credential_file(support::VALID_CONFIG);
        let source = CredentialsFile::new(&path);
        assert_eq!(source.path(), path.as_path());

        let creds = source.resolve().unwrap();
        assert_eq!(creds.address, "nas.example");
        assert_eq!(creds.password.as_deref(), Some("secret"));
        assert_eq!(creds.key_path, None);
    }

    #[test]
    fn file_source_is_not_cached() {
        let (_dir, path) = support::credential_file(support::VALID_CONFIG);
        let source = CredentialsFile::new(&path);
        assert_eq!(source.resolve().unwrap().password.as_deref(), Some("secret"));

        std::fs::write(&path, support::VALID_CONFIG.replace("secret", "rotated")).unwrap();
        assert_eq!(source.resolve().unwrap().password.as_deref(), Some("rotated"));
    }

    #[test]
    fn default_source_points_at_system_config() {
        assert_eq!(
            CredentialsFile::default().path(),
            std::path::Path::new(CREDENTIALS_CONFIG)
        );
    }
}
