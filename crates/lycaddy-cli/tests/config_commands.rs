//! Config command handlers against a scratch caddy directory.

use std::fs;

use lycaddy_cli::{CliConfig, CliError, bootstrap, handlers};

const CADDYFILE: &str = "{\n\tadmin off\n}\n\n:2015 {\n\troot * ./site\n\tfile_server\n}\n";

fn context() -> (tempfile::TempDir, lycaddy_cli::CliContext) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Caddyfile"), CADDYFILE).unwrap();
    let ctx = bootstrap(CliConfig::with_defaults(Some(dir.path().to_path_buf())).unwrap());
    (dir, ctx)
}

#[tokio::test]
async fn set_root_keeps_port_and_other_directives() {
    let (dir, ctx) = context();

    handlers::config::set(&ctx, Some("D:\\www".into()), None)
        .await
        .unwrap();

    let text = fs::read_to_string(dir.path().join("Caddyfile")).unwrap();
    assert_eq!(
        text,
        "{\n\tadmin off\n}\n\n:2015 {\n\troot * D:/www\n\tfile_server\n}\n"
    );
}

#[tokio::test]
async fn set_requires_a_value() {
    let (_dir, ctx) = context();

    let err = handlers::config::set(&ctx, None, None).await.unwrap_err();
    let cli_err = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_err.exit_code(), 2);
}

#[tokio::test]
async fn show_without_caddyfile_is_not_found() {
    let (dir, ctx) = context();
    fs::remove_file(dir.path().join("Caddyfile")).unwrap();

    let err = handlers::config::show(&ctx, false).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CliError>(),
        Some(CliError::NotFound(_))
    ));
}

#[tokio::test]
async fn files_list_of_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing").to_string_lossy().into_owned();

    let err = handlers::files::list(missing, false).await.unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 66);
}
