use radep::models::{
    deploy_manifest::{DeployManifest, DeployedFile},
    graph::{DependencyGraph, ResolvedDependency},
    options::{OptionValue, Options},
    recipe::{Recipe, RecipeToml, RequirementRule},
    requirement::{PackageRef, Requirement, ToolRequirement},
    settings::{BuildSettings, BuildType, TargetOs},
};
use std::path::PathBuf;
use std::str::FromStr;

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_target_os_covers_all_recipe_branches() {
        // the five branches a recipe can select on
        assert_eq!(TargetOs::all().len(), 5);
        for name in ["emscripten", "windows", "macos", "linux", "other"] {
            assert!(TargetOs::from_str(name).is_ok(), "should parse: {}", name);
        }
    }

    #[test]
    fn test_target_os_rejects_unknown() {
        assert!(TargetOs::from_str("haiku").is_err());
        let err = TargetOs::from_str("haiku").unwrap_err().to_string();
        assert!(err.contains("emscripten"));
    }

    #[test]
    fn test_build_settings_serde() {
        let settings = BuildSettings::new(TargetOs::Linux).with_build_type(BuildType::Debug);
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: BuildSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}

#[cfg(test)]
mod options_tests {
    use super::*;

    #[test]
    fn test_option_value_conversions() {
        let v: OptionValue = true.into();
        assert_eq!(v.as_bool(), Some(true));

        let v: OptionValue = "x11".into();
        assert_eq!(v.as_str(), Some("x11"));
    }

    #[test]
    fn test_options_toml_round_trip() {
        let mut options = Options::new();
        options.set("shared", true);
        options.set("backend", "opengl");

        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            options: Options,
        }

        let content = toml::to_string(&Wrapper {
            options: options.clone(),
        })
        .unwrap();
        let parsed: Wrapper = toml::from_str(&content).unwrap();
        assert_eq!(parsed.options, options);
    }
}

#[cfg(test)]
mod requirement_tests {
    use super::*;

    #[test]
    fn test_package_ref_identifier_format() {
        let r = PackageRef::parse("icu-shaper@77.1").unwrap();
        assert_eq!(r.to_string(), "icu-shaper@77.1");
    }

    #[test]
    fn test_requirement_carries_selected_options() {
        let mut options = Options::new();
        options.set("use_freetype", true);

        let req = Requirement::with_options(PackageRef::new("skia-canvas", "143.0.0"), options);
        assert_eq!(req.identifier(), "skia-canvas@143.0.0");
        assert_eq!(req.options.get_bool("use_freetype"), Some(true));
    }

    #[test]
    fn test_tool_requirement_toml_shape() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            tool: ToolRequirement,
        }

        let parsed: Wrapper = toml::from_str("tool = { ref = \"cmake@3.27.0\" }").unwrap();
        assert_eq!(parsed.tool.identifier(), "cmake@3.27.0");
    }
}

#[cfg(test)]
mod recipe_tests {
    use super::*;

    #[test]
    fn test_recipe_selection_matches_declaration_order() {
        let mut recipe = Recipe::new("app".to_string(), "1.0.0".to_string());
        recipe.add_rule(RequirementRule::new(PackageRef::new("zstd", "1.5.7")));
        recipe.add_rule(RequirementRule::new(PackageRef::new("icu", "77.1")));

        let reqs = recipe.requirements_for(TargetOs::Windows);
        let ids: Vec<String> = reqs.iter().map(Requirement::identifier).collect();
        assert_eq!(ids, vec!["zstd@1.5.7", "icu@77.1"]);
    }

    #[test]
    fn test_recipe_toml_rejects_malformed_refs() {
        let content = r#"
[recipe]
name = "app"
version = "1.0.0"

[[requires]]
ref = "zstd/1.5.7"
"#;
        assert!(toml::from_str::<RecipeToml>(content).is_err());
    }
}

#[cfg(test)]
mod graph_tests {
    use super::*;

    #[test]
    fn test_graph_validation_rejects_bad_libdirs() {
        let mut graph = DependencyGraph::new("app", "1.0.0");
        let mut dep = ResolvedDependency::new("1.0.0", Some(PathBuf::from("/store/pkg")));
        dep.libdirs = vec!["../../etc".to_string()];
        graph.add_dependency("pkg", dep);

        let err = graph.validate().unwrap_err();
        assert!(err.contains("pkg"));
    }

    #[test]
    fn test_graph_dependencies_iterate_in_name_order() {
        let mut graph = DependencyGraph::new("app", "1.0.0");
        graph.add_dependency("zstd", ResolvedDependency::new("1.5.7", None));
        graph.add_dependency("icu", ResolvedDependency::new("77.1", None));
        graph.add_dependency("sdl", ResolvedDependency::new("3.4.0", None));

        let names: Vec<&String> = graph.dependencies.keys().collect();
        assert_eq!(names, vec!["icu", "sdl", "zstd"]);
    }
}

#[cfg(test)]
mod manifest_tests {
    use super::*;

    #[test]
    fn test_manifest_rejects_malformed_hash() {
        let mut manifest = DeployManifest::new("app@1.0.0");
        manifest.files.push(DeployedFile {
            name: "libz.so".to_string(),
            source: PathBuf::from("/store/z/lib/libz.so"),
            size: 1,
            sha256: "abc".to_string(),
        });
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_manifest_accepts_valid_entries() {
        let mut manifest = DeployManifest::new("app@1.0.0");
        manifest.files.push(DeployedFile {
            name: "libz.so".to_string(),
            source: PathBuf::from("/store/z/lib/libz.so"),
            size: 1,
            sha256: "a".repeat(64),
        });
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.total_size(), 1);
    }
}
