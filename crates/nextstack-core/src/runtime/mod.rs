//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Package manager detection from the user agent hint
//! - Availability probing (`<pm> --version`)
//! - Bounded install subprocesses with per-sub-project outcomes

pub mod install;
pub mod package_manager;

pub use install::{InstallCommand, InstallOutcome, Installer, INSTALL_TIMEOUT};
pub use package_manager::{
    available_package_managers, check_package_manager, install_choices, PackageManager,
    RuntimeInfo,
};
