use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_layout_then_every_widget_has_required_modules()
{
    let widgets_dir = src_dir().join("widgets");
    let mod_rs = widgets_dir.join("mod.rs");
    let mut violations: Vec<String> = Vec::new();

    let declared_modules =
        declared_pub_crate_modules(&mod_rs, &mut violations);
    let fs_modules = child_entries(&widgets_dir, EntryKind::Dir);

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared widgets {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for widget in &declared_modules {
        let widget_dir = widgets_dir.join(widget);
        for file in WIDGET_FILES {
            if !widget_dir.join(file).is_file() {
                violations.push(format!(
                    "{}: missing {file}",
                    widget_dir.display()
                ));
            }
        }

        let prefix = snake_to_pascal_case(widget);
        validate_event_contract(
            &widget_dir.join("event.rs"),
            &prefix,
            &mut violations,
        );
        validate_view_file(
            &widget_dir.join("view").join("mod.rs"),
            &prefix,
            &mut violations,
        );
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_components_when_validating_conventions_then_all_modules_comply() {
    let components_dir = src_dir().join("components");
    let mod_rs = components_dir.join("mod.rs");
    let mut violations: Vec<String> = Vec::new();

    let declared_modules =
        declared_pub_crate_modules(&mod_rs, &mut violations);
    let mut fs_modules = child_entries(&components_dir, EntryKind::RustFile);
    fs_modules.remove("mod");

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = components_dir.join(format!("{module}.rs"));
        let prefix = snake_to_pascal_case(module);
        validate_view_file(&file_path, &prefix, &mut violations);

        let file = parse(&file_path);
        let events: Vec<String> = file
            .items
            .iter()
            .filter_map(|item| match item {
                Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
                _ => None,
            })
            .filter(|name| name.ends_with("Event"))
            .collect();
        if events != [format!("{prefix}Event")] {
            violations.push(format!(
                "{}: expected exactly one event enum {prefix}Event, found {events:?}",
                file_path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_source_tree_when_scanning_imports_then_no_glob_imports_are_used() {
    let mut files = Vec::new();
    collect_rust_files(&src_dir(), &mut files);
    assert!(!files.is_empty(), "no sources found");

    let violations: Vec<String> = files
        .iter()
        .filter(|path| has_glob_import(&parse(path).items))
        .map(|path| format!("{}: wildcard use/import is forbidden", path.display()))
        .collect();

    assert!(
        violations.is_empty(),
        "glob import violations:\n{}",
        violations.join("\n")
    );
}

/// Views render only: no logging and no tasks.
fn validate_view_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let source = read(file_path);
    for forbidden in ["log::", "Task::", "iced::Task", "std::fs::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let file = parse(file_path);
    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {props_names:?}",
            file_path.display()
        ));
    }
    for name in props_names {
        if !name.starts_with(prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with prefix '{prefix}'",
                file_path.display()
            ));
        }
    }
}

/// A widget event module declares `<Widget>Intent`, `<Widget>Effect` and
/// `<Widget>Event`, and nothing else.
fn validate_event_contract(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(file_path);
    let found: BTreeSet<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect();
    let expected: BTreeSet<String> = ["Intent", "Effect", "Event"]
        .iter()
        .map(|suffix| format!("{prefix}{suffix}"))
        .collect();

    if found != expected {
        violations.push(format!(
            "{}: expected event contract {expected:?}, found {found:?}",
            file_path.display()
        ));
    }
}

fn declared_pub_crate_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let mut declared = BTreeSet::new();
    for item in &parse(mod_rs).items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }
    declared
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    RustFile,
}

fn child_entries(dir: &Path, kind: EntryKind) -> BTreeSet<String> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let matches = match kind {
            EntryKind::Dir => path.is_dir(),
            EntryKind::RustFile => {
                path.is_file() && path.extension().is_some_and(|ext| ext == "rs")
            },
        };
        if !matches {
            continue;
        }

        let stem = path
            .file_stem()
            .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
            .to_string_lossy()
            .to_string();
        names.insert(stem);
    }
    names
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

fn has_glob_import(items: &[Item]) -> bool {
    items.iter().any(|item| match item {
        Item::Use(item_use) => use_tree_has_glob(&item_use.tree),
        Item::Mod(item_mod) => item_mod
            .content
            .as_ref()
            .is_some_and(|(_, items)| has_glob_import(items)),
        _ => false,
    })
}

fn src_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
