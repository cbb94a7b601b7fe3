// Per-target requirement selection over a realistic recipe

use radep::models::requirement::Requirement;
use radep::models::settings::TargetOs;
use radep::utils::config::ConfigParser;

/// A recipe in the shape of a real graphics application: a renderer with
/// wholly different option sets per target, a windowing library with
/// Linux-specific options, packages excluded on some targets, and a pair of
/// unconditional requirements.
const RECIPE: &str = r#"
[recipe]
name = "paint-app"
version = "1.0.0"
layout = "standard"

[[requires]]
ref = "skia-canvas@143.20251028.0"

[requires.options]
enable_svg = true
use_freetype = true
use_system_harfbuzz = true

[requires.platform.emscripten]
enable_svg = true
use_freetype = true
canvaskit_enable_webgl = false

[requires.platform.windows]
enable_svg = true
use_freetype = false
use_system_harfbuzz = true

[[requires]]
ref = "sdl@3.4.0"

[requires.platform.linux]
wayland = false
x11 = true
pulseaudio = false

[[requires]]
ref = "hwloc@2.12.2"
except-os = ["emscripten", "macos"]

[requires.options]
shared = true

[[requires]]
ref = "onetbb@2022.0.0"
except-os = ["emscripten", "macos"]

[[requires]]
ref = "libdatachannel@0.23.2"
except-os = ["emscripten"]

[[requires]]
ref = "libcurl@8.17.0"
except-os = ["emscripten"]

[[requires]]
ref = "zstd@1.5.7"

[[requires]]
ref = "icu-shaper@77.1"

[[tool-requires]]
ref = "cmake@3.27.0"
"#;

fn names(requirements: &[Requirement]) -> Vec<String> {
    requirements.iter().map(|r| r.package.name.clone()).collect()
}

#[test]
fn linux_gets_the_full_requirement_set() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    let reqs = recipe.requirements_for(TargetOs::Linux);

    assert_eq!(
        names(&reqs),
        vec![
            "skia-canvas",
            "sdl",
            "hwloc",
            "onetbb",
            "libdatachannel",
            "libcurl",
            "zstd",
            "icu-shaper",
        ]
    );

    // sdl picks up its Linux platform block
    let sdl = reqs.iter().find(|r| r.package.name == "sdl").unwrap();
    assert_eq!(sdl.options.get_bool("x11"), Some(true));
    assert_eq!(sdl.options.get_bool("wayland"), Some(false));

    // skia falls back to its default block on Linux
    let skia = reqs.iter().find(|r| r.package.name == "skia-canvas").unwrap();
    assert_eq!(skia.options.get_bool("use_freetype"), Some(true));
    assert_eq!(skia.options.get_bool("canvaskit_enable_webgl"), None);
}

#[test]
fn emscripten_excludes_native_only_packages() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    let reqs = recipe.requirements_for(TargetOs::Emscripten);

    let set = names(&reqs);
    assert!(set.contains(&"skia-canvas".to_string()));
    assert!(set.contains(&"sdl".to_string()));
    assert!(set.contains(&"zstd".to_string()));
    assert!(set.contains(&"icu-shaper".to_string()));

    for excluded in ["hwloc", "onetbb", "libdatachannel", "libcurl"] {
        assert!(
            !set.contains(&excluded.to_string()),
            "{} should be excluded on emscripten",
            excluded
        );
    }

    // the wasm option block fully replaces the defaults
    let skia = reqs.iter().find(|r| r.package.name == "skia-canvas").unwrap();
    assert_eq!(skia.options.get_bool("canvaskit_enable_webgl"), Some(false));
    assert_eq!(skia.options.get_bool("use_system_harfbuzz"), None);
}

#[test]
fn macos_excludes_topology_packages_but_keeps_networking() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    let set = names(&recipe.requirements_for(TargetOs::Macos));

    assert!(!set.contains(&"hwloc".to_string()));
    assert!(!set.contains(&"onetbb".to_string()));
    assert!(set.contains(&"libdatachannel".to_string()));
    assert!(set.contains(&"libcurl".to_string()));
}

#[test]
fn windows_uses_its_own_renderer_options() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    let reqs = recipe.requirements_for(TargetOs::Windows);

    let skia = reqs.iter().find(|r| r.package.name == "skia-canvas").unwrap();
    assert_eq!(skia.options.get_bool("use_freetype"), Some(false));

    // sdl has no Windows block, so its (empty) defaults apply
    let sdl = reqs.iter().find(|r| r.package.name == "sdl").unwrap();
    assert!(sdl.options.is_empty());
}

#[test]
fn fallback_target_behaves_like_linux_minus_platform_blocks() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    let reqs = recipe.requirements_for(TargetOs::Other);

    assert_eq!(names(&reqs).len(), 8);

    // no platform block for "other": sdl falls back to defaults
    let sdl = reqs.iter().find(|r| r.package.name == "sdl").unwrap();
    assert!(sdl.options.is_empty());

    let hwloc = reqs.iter().find(|r| r.package.name == "hwloc").unwrap();
    assert_eq!(hwloc.options.get_bool("shared"), Some(true));
}

#[test]
fn tool_requirements_are_target_independent() {
    let recipe = ConfigParser::parse_recipe_config(RECIPE).unwrap();
    assert_eq!(recipe.tool_requires.len(), 1);
    assert_eq!(recipe.tool_requires[0].identifier(), "cmake@3.27.0");
}
