//! Shared fixtures for unit tests

use crate::input::TemplateKind;
use crate::product::ProductConfig;
use crate::runtime::PackageManager;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[derive(Clone)]
pub struct TestProduct;

impl ProductConfig for TestProduct {
    fn name(&self) -> &'static str {
        "test-product"
    }

    fn display_name(&self) -> &'static str {
        "Test Product"
    }

    fn template_dir_env(&self) -> &'static str {
        "TEST_PRODUCT_TEMPLATES"
    }

    fn default_template_dir(&self) -> &'static str {
        "/nonexistent/templates"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install test-product --force"
    }

    fn next_steps(
        &self,
        dir: &Path,
        _kind: TemplateKind,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String> {
        let mut steps = vec![format!("cd {}", dir.display())];
        if !installed {
            steps.push(package_manager.install_hint());
        }
        steps
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A store with `web` and `admin` templates, including junk that must be excluded
pub fn template_store() -> TempDir {
    let store = TempDir::new().unwrap();
    let root = store.path();

    write(root, "web/package.json", r#"{"name":"web-template","private":true}"#);
    write(root, "web/.env.example", "NEXT_PUBLIC_SITE_URL=http://localhost:3000\n");
    write(root, "web/.env", "LEAKED=1\n");
    write(root, "web/src/app/page.tsx", "export default function Page() {}\n");
    write(root, "web/node_modules/next/index.js", "");
    write(root, "web/src/.next/cache/entry", "");
    write(root, "web/package-lock.json", "{}");

    write(root, "admin/package.json", r#"{"name":"admin-template","version":"0.1.0"}"#);
    write(root, "admin/.env.example", "NEXT_PUBLIC_SUPABASE_URL=\nNEXT_PUBLIC_SUPABASE_ANON_KEY=\n");
    write(root, "admin/middleware.ts", "export function middleware() {}\n");
    write(root, "admin/app/layout.tsx", "export default function Layout() {}\n");
    write(root, "admin/.DS_Store", "");
    write(root, "admin/.git/HEAD", "ref: refs/heads/main\n");

    store
}
