//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::process::{Command, Output};

    fn run(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_levenshtein-bound"))
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    #[test]
    fn test_distance_command() {
        let output = run(&["distance", " Levenshtein", "Mwilwnstein "]);
        assert!(output.status.success());
        assert_eq!(stdout(&output).trim(), "6");
    }

    #[test]
    fn test_distance_command_with_variant() {
        let output = run(&["distance", "kitten", "sitting", "--variant", "matrix"]);
        assert!(output.status.success());
        assert_eq!(stdout(&output).trim(), "3");

        let output = run(&["distance", "kitten", "sitting", "--variant", "two-row"]);
        assert_eq!(stdout(&output).trim(), "3");
    }

    #[test]
    fn test_distance_command_bounded() {
        let output = run(&["distance", "kitten", "sitting", "-m", "1"]);
        assert!(output.status.success());
        assert!(stdout(&output).trim().starts_with(">="));
    }

    #[test]
    fn test_negative_max_distance_rejected() {
        let output = run(&["distance", "a", "b", "-m", "-1"]);
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("non-negative"), "stderr: {}", stderr);
    }

    #[test]
    fn test_threshold_on_matrix_variant_rejected() {
        let output = run(&["distance", "a", "b", "-m", "1", "--variant", "matrix"]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_within_exit_status() {
        let output = run(&["within", "test", "tent", "-m", "1"]);
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).contains("within"));

        let output = run(&["within", "test", "toast", "-m", "1"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout(&output).contains("exceeded"));
    }

    #[test]
    fn test_compare_command() {
        let output = run(&["compare", " Kitten", "Miten "]);
        assert!(output.status.success());
        let out = stdout(&output);
        assert!(out.contains("matrix"));
        assert!(out.contains("two-row"));
        assert!(out.contains("bounded"));
    }
}
