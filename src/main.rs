use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};

use phaser_scene_compiler::{
    compiler::Compiler,
    config::CompilerConfig,
    output,
    preview,
    scene::{document::SceneDocument, validator::SceneValidator, Scene, SceneError},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const COMPILE_USAGE: &str = "phaser-scene-compiler compile <scene.json> [output.tsx] [--json]";
const CHECK_USAGE: &str = "phaser-scene-compiler check <scene.json>";
const SHOW_USAGE: &str = "phaser-scene-compiler show <scene.json>";
const NEW_USAGE: &str = "phaser-scene-compiler new <scene.json> [project]";
const ADD_USAGE: &str = "phaser-scene-compiler add <scene.json> <name>";
const SELECT_USAGE: &str = "phaser-scene-compiler select <scene.json> <id>";
const MOVE_USAGE: &str = "phaser-scene-compiler move <scene.json> <id> <x> <y>";
const ATTACH_USAGE: &str = "phaser-scene-compiler attach <scene.json> <id> <script>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("compile") => {
            let mut json = false;
            let mut positional = Vec::new();
            for arg in args {
                if arg == "--json" {
                    json = true;
                } else {
                    positional.push(arg);
                }
            }
            let mut positional = positional.into_iter();
            let scene_path = positional.next().context(COMPILE_USAGE)?;
            compile(&scene_path, positional.next().map(PathBuf::from), json)
        }
        Some("check") => {
            let path = args.next().context(CHECK_USAGE)?;
            check(&path)
        }
        Some("show") => {
            let path = args.next().context(SHOW_USAGE)?;
            show(&path)
        }
        Some("new") => {
            let path = args.next().context(NEW_USAGE)?;
            new_scene(&path, args.next())
        }
        Some("add") => {
            let path = args.next().context(ADD_USAGE)?;
            let name = args.next().context(ADD_USAGE)?;
            let mut doc = SceneDocument::open(&path)?;
            let id = doc.edit(|s| Ok::<_, SceneError>(s.add_object(name)))?;
            doc.save()?;
            println!("{id}");
            Ok(())
        }
        Some("select") => {
            let path = args.next().context(SELECT_USAGE)?;
            let id = parse_id(args.next(), SELECT_USAGE)?;
            edit_and_save(&path, |s| s.select(id))
        }
        Some("move") => {
            let path = args.next().context(MOVE_USAGE)?;
            let id = parse_id(args.next(), MOVE_USAGE)?;
            let x = parse_coord(args.next(), MOVE_USAGE)?;
            let y = parse_coord(args.next(), MOVE_USAGE)?;
            edit_and_save(&path, |s| s.move_object(id, x, y))
        }
        Some("attach") => {
            let path = args.next().context(ATTACH_USAGE)?;
            let id = parse_id(args.next(), ATTACH_USAGE)?;
            let script = args.next().context(ATTACH_USAGE)?;
            edit_and_save(&path, |s| {
                s.attach_script(id, &script)?;
                s.add_script(&script);
                Ok(())
            })
        }
        _ => bail!(
            "Phaser scene compiler\n\nUsage:\n  {COMPILE_USAGE}\n  {CHECK_USAGE}\n  {SHOW_USAGE}\n  {NEW_USAGE}\n  {ADD_USAGE}\n  {SELECT_USAGE}\n  {MOVE_USAGE}\n  {ATTACH_USAGE}"
        ),
    }
}

fn parse_id(arg: Option<String>, usage: &str) -> Result<u64> {
    let arg = arg.context(usage.to_string())?;
    arg.parse()
        .with_context(|| format!("Invalid object id '{arg}'"))
}

fn parse_coord(arg: Option<String>, usage: &str) -> Result<f64> {
    let arg = arg.context(usage.to_string())?;
    let value: f64 = arg
        .parse()
        .with_context(|| format!("Invalid coordinate '{arg}'"))?;
    if !value.is_finite() {
        bail!("Invalid coordinate '{arg}'");
    }
    Ok(value)
}

fn load_scene(path: &str) -> Result<Scene> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))
}

fn compile(scene_path: &str, output_path: Option<PathBuf>, json: bool) -> Result<()> {
    let scene = load_scene(scene_path)?;
    let output_path = output_path.unwrap_or_else(|| CompilerConfig::load().output_path());

    let report = output::compile_to(&scene, &output_path)
        .with_context(|| format!("Failed to compile {scene_path}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!(
            "Compiled {} objects from {} -> {}",
            scene.objects.len(),
            scene_path,
            report.file_path.display(),
        );
    }

    Ok(())
}

fn check(path: &str) -> Result<()> {
    let scene = load_scene(path)?;

    let issues = SceneValidator::validate(&scene);
    for issue in &issues {
        eprintln!("warning: {issue}");
    }

    Compiler::compile(&scene).with_context(|| format!("{path} does not compile"))?;
    eprintln!("{path}: ok ({} warnings)", issues.len());
    Ok(())
}

fn show(path: &str) -> Result<()> {
    let scene = load_scene(path)?;
    let mut stdout = io::stdout();

    preview::render_hierarchy(&mut stdout, &scene)?;
    println!();
    let code = Compiler::compile(&scene)?;
    preview::render_source(&mut stdout, &code)
}

fn new_scene(path: &str, project: Option<String>) -> Result<()> {
    if std::path::Path::new(path).exists() {
        bail!("{path} already exists");
    }
    let mut doc = SceneDocument::open(path)?;
    if let Some(name) = project {
        doc.scene = Scene::with_project(name);
    }
    doc.save()
}

fn edit_and_save(
    path: &str,
    f: impl FnOnce(&mut Scene) -> Result<(), SceneError>,
) -> Result<()> {
    let mut doc = SceneDocument::open(path)?;
    doc.edit(f)?;
    doc.save()
}
