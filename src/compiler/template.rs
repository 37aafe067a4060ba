//! Fixed module scaffold that generated imports and create-body statements
//! are spliced into.

/// Visual resource every generated sprite uses. Per-object assets are not
/// part of the scene model yet.
pub const ASSET_KEY: &str = "player";
pub const ASSET_PATH: &str = "assets/player.png";
pub const SCENE_CLASS: &str = "Level1";
pub const GAME_WIDTH: u32 = 800;
pub const GAME_HEIGHT: u32 = 600;

/// Indentation of statements inside `create()`.
pub const BODY_INDENT: &str = "    ";

/// Top-level names the scaffold declares; script symbols must not shadow them.
pub const TEMPLATE_BINDINGS: &[&str] = &["Phaser", "React", SCENE_CLASS, "GameComponent"];

/// Object blocks bind their entity to this prefix followed by the object index.
pub const SPRITE_BINDING_PREFIX: &str = "sprite";

/// Whether `symbol` is declared by the scaffold or by an object block.
pub fn is_template_binding(symbol: &str) -> bool {
    if TEMPLATE_BINDINGS.contains(&symbol) {
        return true;
    }
    symbol
        .strip_prefix(SPRITE_BINDING_PREFIX)
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

const FRAMEWORK_IMPORTS: &str = "
import Phaser from 'phaser';
import React from 'react';
";

const MOUNT_WRAPPER: &str = "const GameComponent = () => {
  const gameContainer = React.useRef(null);

  React.useEffect(() => {
    const config = {
      type: Phaser.AUTO,
";

const MOUNT_WRAPPER_TAIL: &str = "      parent: gameContainer.current,
";

const UNMOUNT: &str = "    };

    const game = new Phaser.Game(config);

    return () => {
      game.destroy(true);
    };
  }, []);

  return <div ref={gameContainer} />;
};

export default GameComponent;
";

pub struct ModuleTemplate;

impl ModuleTemplate {
    /// Splice import lines and object blocks into the scaffold.
    ///
    /// Both inputs may be empty; the result is still a complete module.
    pub fn assemble(imports: &[String], objects: &[String]) -> String {
        let mut out = String::from(FRAMEWORK_IMPORTS);
        out.push_str(&imports.join("\n"));
        out.push_str("\n\n");

        out.push_str(&format!(
            "class {SCENE_CLASS} extends Phaser.Scene {{\n  constructor() {{\n    super('{SCENE_CLASS}');\n  }}\n\n"
        ));
        out.push_str(&format!(
            "  preload() {{\n    // Preload assets here\n    this.load.image('{ASSET_KEY}', '{ASSET_PATH}'); // Example asset\n  }}\n\n"
        ));
        out.push_str("  create() {\n");
        out.push_str(&objects.join("\n"));
        out.push_str("\n  }\n}\n\n");

        out.push_str(MOUNT_WRAPPER);
        out.push_str(&format!("      width: {GAME_WIDTH},\n      height: {GAME_HEIGHT},\n"));
        out.push_str(MOUNT_WRAPPER_TAIL);
        out.push_str(&format!("      scene: [{SCENE_CLASS}],\n"));
        out.push_str(UNMOUNT);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_module_has_only_framework_imports_and_an_empty_create() {
        let module = ModuleTemplate::assemble(&[], &[]);
        assert!(module.starts_with("\nimport Phaser from 'phaser';\nimport React from 'react';\n\n\nclass Level1"));
        assert!(module.contains("  create() {\n\n  }\n"));
        assert_eq!(module.matches("import ").count(), 2);
        assert!(module.ends_with("export default GameComponent;\n"));
    }

    #[test]
    fn bootstrap_embeds_fixed_dimensions() {
        let module = ModuleTemplate::assemble(&[], &[]);
        assert!(module.contains(
            "      type: Phaser.AUTO,\n      width: 800,\n      height: 600,\n      parent: gameContainer.current,\n      scene: [Level1],\n    };"
        ));
        assert!(module.contains("      game.destroy(true);"));
    }

    #[test]
    fn object_bindings_count_as_template_names() {
        assert!(is_template_binding("Level1"));
        assert!(is_template_binding("sprite0"));
        assert!(is_template_binding("sprite42"));
        assert!(!is_template_binding("sprite"));
        assert!(!is_template_binding("spriteSheet"));
        assert!(!is_template_binding("sprite1a"));
        assert!(!is_template_binding("Sprite1"));
    }

    #[test]
    fn imports_follow_framework_imports_in_order() {
        let imports = vec![
            "import B from './B';".to_string(),
            "import A from './A';".to_string(),
        ];
        let module = ModuleTemplate::assemble(&imports, &[]);
        assert!(module.contains(
            "import React from 'react';\nimport B from './B';\nimport A from './A';\n\nclass Level1"
        ));
    }
}
