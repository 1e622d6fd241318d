//! Environment and platform detection, as passed-in values.
//!
//! Nothing here is a process-wide singleton: code that needs the working
//! directory or the platform family receives an [`Environment`] and asks it.

use muster_paths::{DirectoryPath, PathComparer};

/// The broad operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    Windows,
    Linux,
    MacOs,
    Unknown,
}

impl PlatformFamily {
    /// Linux and macOS count as Unix-family for path semantics.
    pub fn is_unix(&self) -> bool {
        matches!(self, PlatformFamily::Linux | PlatformFamily::MacOs)
    }
}

/// The platform a process runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub family: PlatformFamily,
    pub is_64bit: bool,
}

impl Platform {
    /// Detect the compile-target platform.
    pub fn detect() -> Self {
        let family = if cfg!(target_os = "windows") {
            PlatformFamily::Windows
        } else if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else if cfg!(target_os = "linux") {
            PlatformFamily::Linux
        } else {
            PlatformFamily::Unknown
        };
        Self {
            family,
            is_64bit: cfg!(target_pointer_width = "64"),
        }
    }

    pub fn is_unix(&self) -> bool {
        self.family.is_unix()
    }
}

/// The environment a process operates in.
pub trait Environment {
    /// The current working directory. Always absolute.
    fn working_directory(&self) -> DirectoryPath;

    /// The platform the process runs on.
    fn platform(&self) -> Platform;
}

/// The conventional path comparer for an environment: case-sensitive on
/// Unix-family platforms, insensitive elsewhere.
pub fn default_comparer(environment: &dyn Environment) -> PathComparer {
    PathComparer::platform_default(environment.platform().is_unix())
}

/// The real process environment.
#[derive(Debug, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn working_directory(&self) -> DirectoryPath {
        std::env::current_dir()
            .ok()
            .and_then(|dir| DirectoryPath::new(&dir.to_string_lossy()).ok())
            .unwrap_or_else(DirectoryPath::current)
    }

    fn platform(&self) -> Platform {
        Platform::detect()
    }
}

/// A configurable environment for tests and embedders.
#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    working_directory: DirectoryPath,
    platform: Platform,
}

impl FakeEnvironment {
    /// A Unix-like environment with `/Working` as the working directory.
    pub fn unix() -> Self {
        Self {
            working_directory: DirectoryPath::new("/Working").unwrap_or_else(|_| DirectoryPath::current()),
            platform: Platform {
                family: PlatformFamily::Linux,
                is_64bit: true,
            },
        }
    }

    /// A Windows environment with `C:/Working` as the working directory.
    pub fn windows() -> Self {
        Self {
            working_directory: DirectoryPath::new("C:/Working").unwrap_or_else(|_| DirectoryPath::current()),
            platform: Platform {
                family: PlatformFamily::Windows,
                is_64bit: true,
            },
        }
    }

    pub fn set_working_directory(&mut self, path: DirectoryPath) {
        self.working_directory = path;
    }

    pub fn set_platform_family(&mut self, family: PlatformFamily) {
        self.platform.family = family;
    }

    pub fn set_64bit(&mut self, is_64bit: bool) {
        self.platform.is_64bit = is_64bit;
    }
}

impl Environment for FakeEnvironment {
    fn working_directory(&self) -> DirectoryPath {
        self.working_directory.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_environments_have_absolute_working_directories() {
        assert_eq!(FakeEnvironment::unix().working_directory().full_path(), "/Working");
        assert_eq!(
            FakeEnvironment::windows().working_directory().full_path(),
            "C:/Working"
        );
        assert!(FakeEnvironment::windows().working_directory().is_absolute());
    }

    #[test]
    fn default_comparer_tracks_the_platform_family() {
        assert!(default_comparer(&FakeEnvironment::unix()).is_case_sensitive());
        assert!(!default_comparer(&FakeEnvironment::windows()).is_case_sensitive());
    }

    #[test]
    fn unknown_platforms_are_not_unix() {
        let family = PlatformFamily::Unknown;
        assert!(!family.is_unix());
    }

    #[test]
    fn fake_environments_are_reconfigurable() {
        let mut env = FakeEnvironment::unix();
        env.set_platform_family(PlatformFamily::Windows);
        env.set_64bit(false);
        env.set_working_directory(DirectoryPath::new("C:/Other").unwrap());

        assert_eq!(env.platform().family, PlatformFamily::Windows);
        assert!(!env.platform().is_64bit);
        assert_eq!(env.working_directory().full_path(), "C:/Other");
    }

    #[test]
    fn system_environment_reports_an_absolute_working_directory() {
        let env = SystemEnvironment::new();
        assert!(env.working_directory().is_absolute());
    }
}
