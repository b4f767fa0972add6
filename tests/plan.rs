//! Planner end-to-end tests against a mock manifest feed and a temp staging root

mod helper;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use mockito::Server;
use tempfile::TempDir;

use component_resolver::component::types::{ComponentAction, ComponentRequest};
use component_resolver::config::{COMPONENTS_DIR, ResolverConfig};
use component_resolver::location::builder::LocationBuilder;
use component_resolver::plan::{PlanError, Planner};
use component_resolver::staging::error::StagingError;
use component_resolver::staging::stager::PackageStager;
use component_resolver::version::error::ResolveError;
use component_resolver::version::installed::{InstalledState, InstalledVersionFile};
use component_resolver::version::resolver::VersionResolver;
use helper::{FailingFileSystem, MockRegistry, test_context};

fn config(server: &Server, temp_dir: &TempDir) -> ResolverConfig {
    ResolverConfig {
        component_url: format!("{}/{{Region}}/Components", server.url()),
        staging_dir: Some(temp_dir.path().to_path_buf()),
        ..ResolverConfig::default()
    }
}

#[tokio::test]
async fn plan_install_latest_from_manifest_feed() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();

    let mock = server
        .mock("GET", "/us-west-2/Components/PVDriver/windows/amd64/PVDriver.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"versions": ["1.0.0", "2.0.0", "10.0.0", "11.0", "12.0.0.0"]}"#)
        .create_async()
        .await;

    let planner = Planner::from_config(&config(&server, &temp_dir), None).unwrap();
    let request = ComponentRequest::new("PVDriver", ComponentAction::Install);

    let plan = planner
        .plan(&request, &test_context("us-west-2"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(plan.version, "10.0.0");
    assert_eq!(
        plan.package_url,
        format!(
            "{}/us-west-2/Components/PVDriver/windows/amd64/10.0.0/PVDriver.zip",
            server.url()
        )
    );
    assert_eq!(
        plan.staging_path,
        temp_dir
            .path()
            .join(COMPONENTS_DIR)
            .join("PVDriver")
            .join("10.0.0")
    );
    assert!(plan.staging_path.is_dir());
    assert!(!plan.package_staged);
    assert!(!plan.already_installed);
}

#[tokio::test]
async fn plan_restricted_region_never_touches_standard_template() {
    let server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();

    let planner = Planner::from_config(&config(&server, &temp_dir), None).unwrap();
    let request =
        ComponentRequest::new("PVDriver", ComponentAction::Install).with_version("9000.0.0");

    let plan = planner
        .plan(&request, &test_context("cn-north-1"))
        .await
        .unwrap();

    assert_eq!(
        plan.package_url,
        "https://s3.cn-north-1.amazonaws.com.cn/amazon-ssm-cn-north-1/Components/PVDriver/windows/amd64/9000.0.0/PVDriver.zip"
    );
}

#[tokio::test]
async fn plan_uninstall_uses_recorded_installed_version() {
    let server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = config(&server, &temp_dir);
    InstalledVersionFile::new(
        Arc::new(component_resolver::staging::fs::LocalFileSystem),
        config.installed_root(),
    )
    .record_installed("PVDriver", "7.2.0")
    .unwrap();

    let planner = Planner::from_config(&config, None).unwrap();
    let request = ComponentRequest::new("PVDriver", ComponentAction::Uninstall);

    let plan = planner
        .plan(&request, &test_context("us-west-2"))
        .await
        .unwrap();

    assert_eq!(plan.version, "7.2.0");
    assert_eq!(plan.installed_version, "7.2.0");
    assert!(plan.already_installed);
}

#[tokio::test]
async fn version_named_installed_does_not_collide_with_installed_state() {
    let server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = config(&server, &temp_dir);
    let state = InstalledVersionFile::new(
        Arc::new(component_resolver::staging::fs::LocalFileSystem),
        config.installed_root(),
    );

    let planner = Planner::from_config(&config, None).unwrap();
    let request =
        ComponentRequest::new("PVDriver", ComponentAction::Install).with_version("installed");

    let plan = planner
        .plan(&request, &test_context("us-west-2"))
        .await
        .unwrap();
    state.record_installed("PVDriver", "installed").unwrap();

    assert!(plan.staging_path.is_dir());
    assert_eq!(state.current_version("PVDriver"), "installed");
    assert!(
        planner
            .plan(&request, &test_context("us-west-2"))
            .await
            .unwrap()
            .already_installed
    );
}

#[tokio::test]
async fn plan_reports_no_version_found_for_malformed_manifest_versions() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();

    let _mock = server
        .mock("GET", "/us-west-2/Components/PVDriver/windows/amd64/PVDriver.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"versions": ["Foo", "1.0", "1.0.0.0"]}"#)
        .create_async()
        .await;

    let planner = Planner::from_config(&config(&server, &temp_dir), None).unwrap();
    let request = ComponentRequest::new("PVDriver", ComponentAction::Install);

    let result = planner.plan(&request, &test_context("us-west-2")).await;

    assert!(matches!(
        result,
        Err(PlanError::VersionLookup(ResolveError::NoVersionFound { .. }))
    ));
    // Nothing is staged when there is nothing to install
    assert!(!temp_dir.path().join(COMPONENTS_DIR).join("PVDriver").exists());
}

#[tokio::test]
async fn plan_with_source_and_no_version_never_fetches_computed_manifest() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();

    let mock = server
        .mock("GET", "/us-west-2/Components/PVDriver/windows/amd64/PVDriver.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"versions": ["1.0.0"]}"#)
        .expect(0)
        .create_async()
        .await;

    let planner = Planner::from_config(&config(&server, &temp_dir), None).unwrap();
    let request = ComponentRequest::new("PVDriver", ComponentAction::Install)
        .with_source("https://mirror.example.com/PVDriver.zip");

    let result = planner.plan(&request, &test_context("us-west-2")).await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(PlanError::VersionLookup(ResolveError::SourceWithoutVersion { .. }))
    ));
}

#[tokio::test]
async fn plan_reports_staging_failure_with_cause() {
    let fs = Arc::new(FailingFileSystem::new(io::ErrorKind::PermissionDenied));
    let root = PathBuf::from("/components");
    let planner = Planner::new(
        VersionResolver::new(
            Arc::new(MockRegistry::new().with_versions("PVDriver", vec!["1.0.0"])),
            Arc::new(InstalledVersionFile::new(fs.clone(), root.clone())),
        ),
        LocationBuilder::default(),
        PackageStager::new(fs, root),
    );
    let request = ComponentRequest::new("PVDriver", ComponentAction::Install);

    let result = planner.plan(&request, &test_context("us-west-2")).await;

    match result {
        Err(PlanError::Staging(StagingError::CreateFolder { path, source })) => {
            assert_eq!(path, PathBuf::from("/components/PVDriver/1.0.0"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected staging failure, got {:?}", other),
    }
}
