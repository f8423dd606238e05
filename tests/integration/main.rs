//! Integration tests for sifcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Command with isolated cache root and config file
    fn sifcache(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("sifcache");
        cmd.env("SINGULARITY_CACHEDIR", temp.path().join("cache"))
            .env("SIFCACHE_CONFIG", temp.path().join("config.toml"));
        cmd
    }

    fn digest_of(temp: &TempDir, file: &Path) -> String {
        let output = sifcache(temp).arg("hash").arg(file).output().unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Local cache for library container images"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("sifcache"));
    }

    #[test]
    fn dir_honors_override() {
        let temp = TempDir::new().unwrap();
        let expected = temp.path().join("cache").join("library");
        sifcache(&temp)
            .args(["dir", "--library"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
    }

    #[test]
    fn dir_flag_beats_env() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["--cache-dir", "/tmp/x", "dir", "--library"])
            .assert()
            .success()
            .stdout("/tmp/x/library\n");
    }

    #[test]
    fn dir_empty_env_uses_default() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .env("SINGULARITY_CACHEDIR", "")
            .arg("dir")
            .assert()
            .success()
            .stdout(predicate::str::contains(".singularity/cache"));
    }

    #[test]
    fn path_prints_image_location() {
        let temp = TempDir::new().unwrap();
        let expected = temp
            .path()
            .join("cache")
            .join("library")
            .join("ubuntu_latest.sif");
        sifcache(&temp)
            .args(["path", "ubuntu_latest.sif"])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
    }

    #[test]
    fn exists_rejects_empty_arguments() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["exists", "", ""])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid argument"));
    }

    #[test]
    fn exists_missing_image() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["exists", "sha256.abc", "ubuntu_latest.sif"])
            .assert()
            .code(1)
            .stdout("false\n");
    }

    #[test]
    fn import_then_exists() {
        let temp = TempDir::new().unwrap();
        let pulled = temp.path().join("pulled.sif");
        fs::write(&pulled, b"ubuntu image").unwrap();
        let digest = digest_of(&temp, &pulled);

        sifcache(&temp)
            .arg("import")
            .arg(&pulled)
            .args(["--name", "ubuntu_latest.sif"])
            .assert()
            .success()
            .stdout(predicate::str::contains(digest.as_str()));

        sifcache(&temp)
            .args(["exists", digest.as_str(), "ubuntu_latest.sif"])
            .assert()
            .success()
            .stdout("true\n");

        sifcache(&temp)
            .args(["exists", "wrongHash", "ubuntu_latest.sif"])
            .assert()
            .code(1)
            .stdout("false\n");
    }

    #[test]
    fn list_json_after_import() {
        let temp = TempDir::new().unwrap();
        let pulled = temp.path().join("alpine.sif");
        fs::write(&pulled, b"alpine").unwrap();

        sifcache(&temp).arg("import").arg(&pulled).assert().success();

        sifcache(&temp)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"name\": \"alpine.sif\""));
    }

    #[test]
    fn list_empty() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout("[]\n");
    }

    #[test]
    fn remove_drops_single_image() {
        let temp = TempDir::new().unwrap();
        let pulled = temp.path().join("alpine.sif");
        fs::write(&pulled, b"alpine").unwrap();

        sifcache(&temp).arg("import").arg(&pulled).assert().success();
        sifcache(&temp)
            .args(["remove", "alpine.sif"])
            .assert()
            .success()
            .stdout(predicate::str::contains("removed alpine.sif"));

        assert!(!temp.path().join("cache/library/alpine.sif").exists());
        sifcache(&temp)
            .args(["remove", "alpine.sif"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not cached"));
    }

    #[test]
    fn import_rejects_reserved_name() {
        let temp = TempDir::new().unwrap();
        let pulled = temp.path().join("pulled.sif");
        fs::write(&pulled, b"image").unwrap();

        sifcache(&temp)
            .arg("import")
            .arg(&pulled)
            .args(["--name", ".sifcache-ubuntu.sif"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid argument"));
    }

    #[test]
    fn clean_removes_cache() {
        let temp = TempDir::new().unwrap();
        let pulled = temp.path().join("pulled.sif");
        fs::write(&pulled, b"image").unwrap();
        let digest = digest_of(&temp, &pulled);

        sifcache(&temp).arg("import").arg(&pulled).assert().success();
        sifcache(&temp).args(["clean", "--yes"]).assert().success();

        assert!(!temp.path().join("cache").exists());
        sifcache(&temp)
            .args(["exists", digest.as_str(), "pulled.sif"])
            .assert()
            .code(1);
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        sifcache(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"));
    }

    #[test]
    fn config_file_sets_cache_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.toml"),
            "[cache]\ndir = \"/srv/sif-cache\"\n",
        )
        .unwrap();

        sifcache(&temp)
            .env_remove("SINGULARITY_CACHEDIR")
            .arg("dir")
            .assert()
            .success()
            .stdout("/srv/sif-cache\n");
    }
}
