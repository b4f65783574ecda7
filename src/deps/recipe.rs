//! Installation recipes.
//!
//! A [`Recipe`] turns a module name and a package name into human-readable
//! install instructions for one distributor tag. Dependencies hold one recipe
//! per tag; see [`Dependency::with_recipe`](super::Dependency::with_recipe).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Distributor tags reported by the built-in platform resolver.
pub mod tags {
    pub const FEDORA: &str = "Fedora";
    pub const DEBIAN: &str = "Debian";
    pub const UBUNTU: &str = "Ubuntu";
    pub const ARCH: &str = "Arch";
    pub const OPENSUSE: &str = "openSUSE";
    pub const DARWIN_MACPORTS: &str = "Darwin_macports";
    pub const DARWIN_FINK: &str = "Darwin_fink";
    pub const DARWIN_HOMEBREW: &str = "Darwin_homebrew";
    pub const DARWIN_PIP: &str = "Darwin_pip";

    /// Prefix shared by all Mac tags.
    pub const DARWIN_PREFIX: &str = "Darwin_";
}

/// What a recipe is asked to explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeRequest<'a> {
    /// The dependency key (the module that failed to load).
    pub module: &'a str,
    /// The package that provides it on this platform.
    pub package: &'a str,
}

type RecipeFn = dyn Fn(&RecipeRequest<'_>) -> String + Send + Sync;

/// Known package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    // Linux
    Apt,
    Yum,
    Dnf,
    Pacman,
    Zypper,

    // Mac OS X
    MacPorts,
    Fink,
    Homebrew,
    Pip,
}

impl PackageManager {
    /// Name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Apt => "apt",
            Self::Yum => "yum",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
            Self::Zypper => "zypper",
            Self::MacPorts => "MacPorts",
            Self::Fink => "Fink",
            Self::Homebrew => "Homebrew",
            Self::Pip => "PIP",
        }
    }

    /// The command line that installs `package`.
    pub fn install_command(&self, package: &str) -> String {
        match self {
            Self::Apt | Self::Fink => format!("sudo apt-get install {}", package),
            Self::Yum => format!("su -c \"yum install {}\"", package),
            Self::Dnf => format!("sudo dnf install {}", package),
            Self::Pacman => format!("sudo pacman -S {}", package),
            Self::Zypper => format!("sudo zypper install {}", package),
            Self::MacPorts => format!("sudo port install {}", package),
            Self::Homebrew => format!("brew install {}", package),
            Self::Pip => format!("pip install {}", package),
        }
    }

    /// Tag suffix used for the Mac managers (`Darwin_<suffix>`).
    pub fn darwin_suffix(&self) -> Option<&'static str> {
        match self {
            Self::MacPorts => Some("macports"),
            Self::Fink => Some("fink"),
            Self::Homebrew => Some("homebrew"),
            Self::Pip => Some("pip"),
            _ => None,
        }
    }

    /// Full Mac distributor tag, e.g. `Darwin_homebrew`.
    pub fn darwin_tag(&self) -> Option<String> {
        self.darwin_suffix()
            .map(|suffix| format!("{}{}", tags::DARWIN_PREFIX, suffix))
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apt" | "apt-get" => Ok(Self::Apt),
            "yum" => Ok(Self::Yum),
            "dnf" => Ok(Self::Dnf),
            "pacman" => Ok(Self::Pacman),
            "zypper" => Ok(Self::Zypper),
            "macports" | "port" => Ok(Self::MacPorts),
            "fink" => Ok(Self::Fink),
            "homebrew" | "brew" => Ok(Self::Homebrew),
            "pip" => Ok(Self::Pip),
            _ => Err(format!("unknown package manager: {}", s)),
        }
    }
}

/// Install instructions for one distributor tag.
#[derive(Clone)]
pub struct Recipe {
    render: Arc<RecipeFn>,
    package: Option<String>,
}

impl Recipe {
    /// Build a recipe from an arbitrary function.
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(&RecipeRequest<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
            package: None,
        }
    }

    /// A Linux distribution's package manager, e.g. `Recipe::system("Debian", Apt)`.
    pub fn system(os: &str, manager: PackageManager) -> Self {
        let os = os.to_string();
        Self::from_fn(move |req| {
            format!(
                "On {}, you can install {} with:\n{}",
                os,
                req.module,
                manager.install_command(req.package)
            )
        })
    }

    /// One of the competing Mac package managers.
    pub fn darwin(manager: PackageManager) -> Self {
        Self::from_fn(move |req| {
            format!(
                "On Mac OS X, you can install {} with {} like this:\n{}",
                req.module,
                manager.display_name(),
                manager.install_command(req.package)
            )
        })
    }

    /// The conventional recipe for `manager` on `tag`.
    ///
    /// Mac tags get the Mac wording, everything else the distribution wording.
    pub fn for_tag(tag: &str, manager: PackageManager) -> Self {
        if tag.starts_with(tags::DARWIN_PREFIX) {
            Self::darwin(manager)
        } else {
            Self::system(tag, manager)
        }
    }

    /// A free-form command with a `{package}` placeholder.
    pub fn command(os: &str, template: &str) -> Self {
        let os = os.to_string();
        let template = template.to_string();
        Self::from_fn(move |req| {
            format!(
                "On {}, you can install {} with:\n{}",
                os,
                req.module,
                template.replace("{package}", req.package)
            )
        })
    }

    pub fn yum(os: &str) -> Self {
        Self::system(os, PackageManager::Yum)
    }

    pub fn apt(os: &str) -> Self {
        Self::system(os, PackageManager::Apt)
    }

    /// Use `package` instead of the dependency key on this platform.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Package name this recipe carries, if any.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    /// Render the instructions.
    pub fn render(&self, request: &RecipeRequest<'_>) -> String {
        (self.render)(request)
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(module: &'a str, package: &'a str) -> RecipeRequest<'a> {
        RecipeRequest { module, package }
    }

    #[test]
    fn apt_recipe_names_module_and_command() {
        let text = Recipe::apt("Debian").render(&request("bz2", "python3-bz2"));
        assert_eq!(
            text,
            "On Debian, you can install bz2 with:\nsudo apt-get install python3-bz2"
        );
    }

    #[test]
    fn yum_recipe_uses_su() {
        let text = Recipe::yum("Fedora").render(&request("gst", "gstreamer-python"));
        assert!(text.starts_with("On Fedora, you can install gst with:\n"));
        assert!(text.ends_with("su -c \"yum install gstreamer-python\""));
    }

    #[test]
    fn darwin_recipe_names_manager() {
        let text =
            Recipe::darwin(PackageManager::MacPorts).render(&request("twisted", "py27-twisted"));
        assert_eq!(
            text,
            "On Mac OS X, you can install twisted with MacPorts like this:\nsudo port install py27-twisted"
        );
    }

    #[test]
    fn fink_uses_apt_get() {
        let text = Recipe::darwin(PackageManager::Fink).render(&request("gtk", "pygtk2"));
        assert!(text.contains("with Fink like this"));
        assert!(text.contains("sudo apt-get install pygtk2"));
    }

    #[test]
    fn for_tag_picks_wording_by_tag() {
        let mac = Recipe::for_tag(tags::DARWIN_HOMEBREW, PackageManager::Homebrew)
            .render(&request("bz2", "bzip2"));
        assert!(mac.starts_with("On Mac OS X"));
        assert!(mac.contains("brew install bzip2"));

        let linux =
            Recipe::for_tag(tags::ARCH, PackageManager::Pacman).render(&request("bz2", "bzip2"));
        assert!(linux.starts_with("On Arch"));
        assert!(linux.contains("sudo pacman -S bzip2"));
    }

    #[test]
    fn command_template_substitutes_package() {
        let text = Recipe::command("Alpine", "apk add {package}").render(&request("bz2", "bzip2"));
        assert!(text.ends_with("apk add bzip2"));
    }

    #[test]
    fn from_fn_receives_request() {
        let recipe = Recipe::from_fn(|req| format!("{}:{}", req.module, req.package));
        assert_eq!(recipe.render(&request("a", "b")), "a:b");
    }

    #[test]
    fn with_package_is_recorded() {
        let recipe = Recipe::apt("Ubuntu").with_package("python3-gi");
        assert_eq!(recipe.package(), Some("python3-gi"));
        assert!(Recipe::apt("Ubuntu").package().is_none());
    }

    #[test]
    fn package_manager_parses_aliases() {
        assert_eq!("apt-get".parse::<PackageManager>(), Ok(PackageManager::Apt));
        assert_eq!("Brew".parse::<PackageManager>(), Ok(PackageManager::Homebrew));
        assert_eq!("port".parse::<PackageManager>(), Ok(PackageManager::MacPorts));
        assert!("apk".parse::<PackageManager>().is_err());
    }

    #[test]
    fn darwin_tags_only_for_mac_managers() {
        assert_eq!(
            PackageManager::Homebrew.darwin_tag().as_deref(),
            Some(tags::DARWIN_HOMEBREW)
        );
        assert_eq!(PackageManager::Pip.darwin_tag().as_deref(), Some(tags::DARWIN_PIP));
        assert!(PackageManager::Apt.darwin_tag().is_none());
    }
}
