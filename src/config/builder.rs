//! Turning configuration into a populated registry and collaborators.

use crate::config::schema::{DepguideConfig, DependencyConfig, DetailedRecipeConfig, RecipeConfig};
use crate::deps::{tags, Dependency, DependencyRegistry, PackageManager, Recipe};
use crate::error::{DepguideError, Result};
use crate::platform::{Platform, PlatformResolver, StaticResolver, SystemResolver};
use crate::report::IssueTrackerReporter;

/// Build the registry described by `config`.
///
/// Dependencies are registered in file order; a repeated key replaces the
/// earlier entry.
pub fn build_registry(config: &DepguideConfig) -> Result<DependencyRegistry> {
    let mut registry = DependencyRegistry::new(&config.app_name);
    for dep in &config.dependencies {
        registry.register(build_dependency(dep)?);
    }
    Ok(registry)
}

/// Build one dependency.
pub fn build_dependency(config: &DependencyConfig) -> Result<Dependency> {
    if config.key.trim().is_empty() {
        return Err(DepguideError::ConfigValidationError {
            message: format!("dependency '{}' has an empty key", config.name),
        });
    }

    let mut dep = Dependency::new(&config.key, &config.name);
    if let Some(homepage) = &config.homepage {
        dep = dep.with_homepage(homepage);
    }
    if let Some(verify) = &config.verify {
        dep = dep.with_verify_command(verify);
    }
    if let Some(version) = &config.version {
        dep = dep.with_version_command(&version.command);
        if let Some(minimum) = &version.minimum {
            dep = dep.with_minimum_version(minimum);
        }
    }

    for (tag, recipe) in &config.recipes {
        let recipe = build_recipe(tag, recipe).map_err(|message| {
            DepguideError::ConfigValidationError {
                message: format!("dependency '{}', recipe '{}': {}", config.key, tag, message),
            }
        })?;
        dep = dep.with_recipe(tag, recipe);
    }

    Ok(dep)
}

fn build_recipe(tag: &str, config: &RecipeConfig) -> std::result::Result<Recipe, String> {
    match config {
        RecipeConfig::Manager(name) => manager_recipe(tag, name),
        RecipeConfig::Detailed(DetailedRecipeConfig {
            manager,
            command,
            package,
        }) => {
            let recipe = match (manager, command) {
                (Some(name), None) => manager_recipe(tag, name)?,
                (None, Some(template)) => Recipe::command(tag, template),
                (Some(_), Some(_)) => {
                    return Err("set either 'manager' or 'command', not both".to_string())
                }
                (None, None) => return Err("needs a 'manager' or a 'command'".to_string()),
            };
            Ok(match package {
                Some(package) => recipe.with_package(package),
                None => recipe,
            })
        }
    }
}

/// Recipe for a named manager; Mac managers only on `Darwin_*` tags and
/// Linux managers only elsewhere.
fn manager_recipe(tag: &str, name: &str) -> std::result::Result<Recipe, String> {
    let manager: PackageManager = name.parse()?;
    let mac_tag = tag.starts_with(tags::DARWIN_PREFIX);
    match (mac_tag, manager.darwin_suffix().is_some()) {
        (true, false) => Err(format!("'{}' is not a Mac package manager", name)),
        (false, true) => Err(format!("'{}' is a Mac package manager", name)),
        _ => Ok(Recipe::for_tag(tag, manager)),
    }
}

/// Reporter for the configured report URL.
pub fn build_reporter(config: &DepguideConfig) -> IssueTrackerReporter {
    match &config.report_url {
        Some(url) => IssueTrackerReporter::new(url),
        None => IssueTrackerReporter::unconfigured(),
    }
}

/// The fixed platform from the config, if any.
pub fn platform_override(config: &DepguideConfig) -> Option<Platform> {
    config.platform.as_ref().map(|p| {
        let description = p.description.clone().unwrap_or_else(|| p.distributor.clone());
        let mut platform = Platform::new(&p.distributor, description);
        platform.release = p.release.clone();
        platform
    })
}

/// The configured Mac package manager, if any.
pub fn darwin_manager(config: &DepguideConfig) -> Result<Option<PackageManager>> {
    let Some(name) = &config.darwin_manager else {
        return Ok(None);
    };

    let manager: PackageManager = name
        .parse()
        .map_err(|message| DepguideError::ConfigValidationError { message })?;
    if manager.darwin_suffix().is_none() {
        return Err(DepguideError::ConfigValidationError {
            message: format!("'{}' is not a Mac package manager", name),
        });
    }
    Ok(Some(manager))
}

/// Choose the platform resolver.
///
/// A platform given on the command line wins, then one fixed in the config,
/// then detection of the running machine.
pub fn build_resolver(
    config: Option<&DepguideConfig>,
    cli_platform: Option<Platform>,
) -> Result<Box<dyn PlatformResolver>> {
    if let Some(platform) = cli_platform.or_else(|| config.and_then(platform_override)) {
        tracing::debug!("Using fixed platform {}", platform.distributor);
        return Ok(Box::new(StaticResolver::new(platform)));
    }

    let mut resolver = SystemResolver::new();
    if let Some(manager) = config.map(darwin_manager).transpose()?.flatten() {
        resolver = resolver.with_darwin_manager(manager);
    }
    Ok(Box::new(resolver))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> DepguideConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    const CONFIG: &str = r#"
app_name: Flumotion
report_url: https://bugs.example.org/new
dependencies:
  - key: bz2
    name: Compression Support
    homepage: https://sourceware.org/bzip2/
    verify: python3 -c "import bz2"
    recipes:
      Debian: apt
      Fedora: { manager: yum, package: bzip2-libs }
      Darwin_homebrew: brew
      Arch: { command: "sudo pacman -S {package}" }
  - key: gi
    name: GObject Introspection
  - key: bz2
    name: Compression Support (replaced)
"#;

    #[test]
    fn build_registry_registers_in_order_with_overwrite() {
        let registry = build_registry(&parse(CONFIG)).unwrap();
        assert_eq!(registry.owner(), "Flumotion");
        assert_eq!(registry.keys(), vec!["bz2", "gi"]);
        assert_eq!(
            registry.lookup("bz2").unwrap().name(),
            "Compression Support (replaced)"
        );
    }

    #[test]
    fn build_dependency_maps_recipes() {
        let config = parse(CONFIG);
        let dep = build_dependency(&config.dependencies[0]).unwrap();

        let debian = dep.install(&Platform::new(tags::DEBIAN, "Debian 12")).unwrap();
        assert_eq!(debian, "On Debian, you can install bz2 with:\nsudo apt-get install bz2");

        let fedora = dep.install(&Platform::new(tags::FEDORA, "Fedora 39")).unwrap();
        assert!(fedora.ends_with("su -c \"yum install bzip2-libs\""));

        let mac = dep
            .install(&Platform::new(tags::DARWIN_HOMEBREW, "Mac OS X 14.2"))
            .unwrap();
        assert!(mac.contains("with Homebrew like this:\nbrew install bz2"));

        let arch = dep.install(&Platform::new(tags::ARCH, "Arch Linux")).unwrap();
        assert!(arch.ends_with("sudo pacman -S bz2"));

        assert_eq!(dep.homepage(), Some("https://sourceware.org/bzip2/"));
        assert!(dep.verify_command().is_some());
    }

    #[test]
    fn unknown_manager_is_a_validation_error() {
        let config = parse(
            "app_name: x\ndependencies:\n  - key: a\n    name: A\n    recipes:\n      Alpine: apk\n",
        );
        let err = build_registry(&config).unwrap_err();
        match err {
            DepguideError::ConfigValidationError { message } => {
                assert!(message.contains("recipe 'Alpine'"));
                assert!(message.contains("apk"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other),
        }
    }

    #[test]
    fn manager_must_match_tag_family() {
        let mac_on_linux = parse(
            "app_name: x\ndependencies:\n  - key: bz2\n    name: B\n    recipes:\n      Debian: { manager: brew }\n",
        );
        let err = build_registry(&mac_on_linux).unwrap_err();
        match err {
            DepguideError::ConfigValidationError { message } => {
                assert!(message.contains("recipe 'Debian'"));
                assert!(message.contains("is a Mac package manager"));
            }
            other => panic!("Expected ConfigValidationError, got {:?}", other),
        }

        let linux_on_mac = parse(
            "app_name: x\ndependencies:\n  - key: bz2\n    name: B\n    recipes:\n      Darwin_homebrew: apt\n",
        );
        assert!(matches!(
            build_registry(&linux_on_mac),
            Err(DepguideError::ConfigValidationError { .. })
        ));

        let fink_on_mac = parse(
            "app_name: x\ndependencies:\n  - key: bz2\n    name: B\n    recipes:\n      Darwin_fink: fink\n",
        );
        assert!(build_registry(&fink_on_mac).is_ok());
    }

    #[test]
    fn detailed_recipe_needs_exactly_one_source() {
        let both = parse(
            "app_name: x\ndependencies:\n  - key: a\n    name: A\n    recipes:\n      Debian: { manager: apt, command: \"apt install {package}\" }\n",
        );
        assert!(build_registry(&both).is_err());

        let neither = parse(
            "app_name: x\ndependencies:\n  - key: a\n    name: A\n    recipes:\n      Debian: { package: liba }\n",
        );
        assert!(build_registry(&neither).is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        let config = parse("app_name: x\ndependencies:\n  - key: \"\"\n    name: A\n");
        assert!(matches!(
            build_registry(&config),
            Err(DepguideError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn minimum_version_is_applied() {
        let config = parse(
            "app_name: x\ndependencies:\n  - key: a\n    name: A\n    version: { command: \"this-command-does-not-exist-12345\", minimum: \"2.0\" }\n",
        );
        let registry = build_registry(&config).unwrap();
        let dep = registry.lookup("a").unwrap();
        assert_eq!(dep.minimum_version(), Some("2.0"));
        // Unknown version passes
        assert!(dep.validate().is_none());
    }

    #[test]
    fn reporter_follows_report_url() {
        use crate::report::Reporter;

        let with_url = build_reporter(&parse(CONFIG));
        assert!(with_url
            .report_reference("DISTRO: Unknown")
            .unwrap()
            .starts_with("https://bugs.example.org/new?title="));

        let without = build_reporter(&parse("app_name: x"));
        assert!(without.report_reference("DISTRO: Unknown").is_err());
    }

    #[test]
    fn platform_override_defaults_description() {
        let config = parse("app_name: x\nplatform:\n  distributor: Ubuntu\n");
        let platform = platform_override(&config).unwrap();
        assert_eq!(platform.distributor, "Ubuntu");
        assert_eq!(platform.description, "Ubuntu");
        assert!(platform_override(&parse("app_name: x")).is_none());
    }

    #[test]
    fn build_resolver_prefers_command_line_platform() {
        let config = parse("app_name: x\nplatform:\n  distributor: Ubuntu\n");

        let resolver =
            build_resolver(Some(&config), Some(Platform::new(tags::ARCH, "Arch Linux"))).unwrap();
        assert_eq!(resolver.resolve().unwrap().distributor, "Arch");

        let resolver = build_resolver(Some(&config), None).unwrap();
        assert_eq!(resolver.resolve().unwrap().distributor, "Ubuntu");
    }

    #[test]
    fn build_resolver_rejects_bad_darwin_manager() {
        let config = parse("app_name: x\ndarwin_manager: yum\n");
        assert!(build_resolver(Some(&config), None).is_err());
    }

    #[test]
    fn darwin_manager_must_be_a_mac_manager() {
        assert_eq!(
            darwin_manager(&parse("app_name: x\ndarwin_manager: macports\n")).unwrap(),
            Some(PackageManager::MacPorts)
        );
        assert!(darwin_manager(&parse("app_name: x\ndarwin_manager: apt\n")).is_err());
        assert!(darwin_manager(&parse("app_name: x\ndarwin_manager: nix\n")).is_err());
        assert_eq!(darwin_manager(&parse("app_name: x")).unwrap(), None);
    }
}
