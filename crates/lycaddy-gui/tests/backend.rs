//! Boundary operation tests for `PanelBackend`.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use lycaddy_core::{CaddyLayout, DirectoryPicker, NoopEmitter, PickPurpose, UploadItem};
use lycaddy_gui::types::{PickReply, ServerReply, StatusReply};
use lycaddy_gui::{PanelBackend, PanelDeps};
use lycaddy_runtime::{CaddySupervisor, SupervisorConfig};
use mockall::mock;
use mockall::predicate::eq;
use tempfile::TempDir;

mock! {
    pub Picker {}

    impl DirectoryPicker for Picker {
        fn pick_directory(&self, purpose: PickPurpose) -> Option<PathBuf>;
    }
}

const CADDYFILE: &str = "# panel site\n:8080 {\n\troot * ./www # static\n\tfile_server browse\n}\n";

fn backend_with(picker: MockPicker) -> (TempDir, PanelBackend) {
    let dir = tempfile::tempdir().unwrap();
    let layout = CaddyLayout::from_dir(dir.path());
    fs::write(&layout.caddyfile, CADDYFILE).unwrap();

    let supervisor = Arc::new(CaddySupervisor::new(
        SupervisorConfig::new(layout),
        Arc::new(NoopEmitter::new()),
    ));
    let backend = PanelBackend::new(PanelDeps::new(supervisor, Arc::new(picker)));
    (dir, backend)
}

fn backend() -> (TempDir, PanelBackend) {
    backend_with(MockPicker::new())
}

#[tokio::test]
async fn read_config_reports_root_and_port() {
    let (_dir, backend) = backend();

    let reply = backend.read_config().await;
    assert!(reply.ok);
    assert_eq!(reply.root_path.as_deref(), Some("./www"));
    assert_eq!(reply.port, Some(8080));
    assert_eq!(reply.error, None);
}

#[tokio::test]
async fn read_config_without_caddyfile_fails_softly() {
    let (_dir, backend) = backend();
    fs::remove_file(&backend.layout().caddyfile).unwrap();

    let reply = backend.read_config().await;
    assert!(!reply.ok);
    assert!(reply.error.unwrap().contains("Caddyfile not found"));
    assert_eq!(reply.port, None);
}

#[tokio::test]
async fn write_config_normalizes_input() {
    let (_dir, backend) = backend();

    let reply = backend.write_config("C:\\sites\\blog ", "not-a-port").await;
    assert!(reply.ok, "{:?}", reply.error);

    let text = fs::read_to_string(&backend.layout().caddyfile).unwrap();
    assert!(text.contains(":80 {"));
    assert!(text.contains("\troot * C:/sites/blog # static\n"));
    assert!(text.contains("file_server browse"));

    let reread = backend.read_config().await;
    assert_eq!(reread.root_path.as_deref(), Some("C:/sites/blog"));
    assert_eq!(reread.port, Some(80));
}

#[tokio::test]
async fn write_config_empty_root_uses_current_dir() {
    let (_dir, backend) = backend();

    assert!(backend.write_config("", "9000").await.ok);
    let reread = backend.read_config().await;
    assert_eq!(reread.root_path.as_deref(), Some("./"));
    assert_eq!(reread.port, Some(9000));
}

#[tokio::test]
async fn select_directory_returns_picked_path() {
    let mut picker = MockPicker::new();
    picker
        .expect_pick_directory()
        .with(eq(PickPurpose::ServeRoot))
        .times(1)
        .returning(|_| Some(PathBuf::from("/srv/site")));
    let (_dir, backend) = backend_with(picker);

    assert_eq!(
        backend.select_directory().await,
        PickReply {
            ok: true,
            path: Some("/srv/site".into())
        }
    );
}

#[tokio::test]
async fn cancelled_upload_picker_is_not_ok() {
    let mut picker = MockPicker::new();
    picker
        .expect_pick_directory()
        .with(eq(PickPurpose::UploadTarget))
        .times(1)
        .returning(|_| None);
    let (_dir, backend) = backend_with(picker);

    assert_eq!(
        backend.select_upload_folder().await,
        PickReply {
            ok: false,
            path: None
        }
    );
}

#[tokio::test]
async fn start_without_executable_reports_path() {
    let (_dir, backend) = backend();

    let reply = backend.start_server().await;
    assert!(!reply.ok);
    assert!(reply.error.unwrap().contains("ly-caddy"));
    assert_eq!(backend.get_status(), StatusReply { running: false });
}

#[tokio::test]
async fn stop_when_stopped_is_an_error_reply() {
    let (_dir, backend) = backend();

    let reply = backend.stop_server().await;
    assert_eq!(
        reply,
        ServerReply {
            ok: false,
            running: None,
            error: Some("Server is not running".into())
        }
    );
}

#[cfg(unix)]
#[tokio::test]
async fn server_lifecycle_with_stub_executable() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, backend) = backend();
    let exe = &backend.layout().executable;
    fs::write(exe, "#!/bin/sh\nexec sleep 30\n").unwrap();
    fs::set_permissions(exe, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(backend.start_server().await, ServerReply::running(true));
    assert!(backend.get_status().running);

    let again = backend.start_server().await;
    assert_eq!(again.error.as_deref(), Some("Server is already running"));

    assert_eq!(backend.stop_server().await, ServerReply::running(false));
    assert!(!backend.get_status().running);

    assert_eq!(backend.restart_server().await, ServerReply::running(true));
    backend.supervisor().shutdown();
}

#[tokio::test]
async fn list_files_requires_a_path() {
    let (_dir, backend) = backend();

    let reply = backend.list_files(None).await;
    assert!(!reply.ok);
    assert!(reply.files.is_empty());
    assert_eq!(reply.error.as_deref(), Some("Select a resource path first"));

    assert!(!backend.list_files(Some("")).await.ok);
}

#[tokio::test]
async fn upload_then_list() {
    let (_dir, backend) = backend();
    let target = tempfile::tempdir().unwrap();
    fs::create_dir(target.path().join("Assets")).unwrap();
    let target_str = target.path().to_str().unwrap();

    let items = vec![
        UploadItem::new("../../b.txt", b"bee".to_vec()),
        UploadItem::new("a.txt", b"a".to_vec()),
        UploadItem::default(),
    ];
    let written = backend.write_files(Some(target_str), items).await;
    assert!(written.ok);
    assert_eq!(written.written, Some(vec!["b.txt".to_string(), "a.txt".to_string()]));
    assert_eq!(written.count, Some(2));

    let listed = backend.list_files(Some(target_str)).await;
    let names: Vec<_> = listed.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["Assets", "a.txt", "b.txt"]);
    assert_eq!(listed.files[2].size, 3);
}

#[tokio::test]
async fn upload_validation_errors() {
    let (_dir, backend) = backend();
    let target = tempfile::tempdir().unwrap();

    let reply = backend
        .write_files(Some(target.path().to_str().unwrap()), Vec::new())
        .await;
    assert!(!reply.ok);
    assert_eq!(reply.written, None);

    let reply = backend
        .write_files(None, vec![UploadItem::new("a.txt", b"a".to_vec())])
        .await;
    assert_eq!(
        reply.error.as_deref(),
        Some("Select a folder and files to upload first")
    );

    let missing = target.path().join("gone");
    let reply = backend
        .write_files(
            Some(missing.to_str().unwrap()),
            vec![UploadItem::new("a.txt", b"a".to_vec())],
        )
        .await;
    assert!(reply.error.unwrap().contains("does not exist"));
}
