use std::path::PathBuf;

use clap::Parser;

use quadra_renderer::RendererConfig;

/// Quadra — a batched 2D quad renderer demo.
#[derive(Parser, Debug)]
#[command(name = "quadra", version, about)]
pub struct Args {
    /// Vertex shader path.
    #[arg(long, default_value = "res/quad.vert.wgsl")]
    pub vertex_shader: PathBuf,

    /// Fragment shader path.
    #[arg(long, default_value = "res/quad.frag.wgsl")]
    pub fragment_shader: PathBuf,

    /// Maximum number of quad instances.
    #[arg(long, default_value_t = 100)]
    pub max_instances: u32,

    /// Texture array layer capacity.
    #[arg(long, default_value_t = 2)]
    pub texture_layers: u32,

    /// Texture layer width in pixels.
    #[arg(long, default_value_t = 2)]
    pub texture_width: u32,

    /// Texture layer height in pixels.
    #[arg(long, default_value_t = 2)]
    pub texture_height: u32,

    /// Image files appended as texture layers, in order.
    #[arg(long = "texture")]
    pub textures: Vec<PathBuf>,

    /// Render the checkerboard grid scene instead of the two-quad scene.
    #[arg(long)]
    pub grid: bool,

    /// Grid columns.
    #[arg(long, default_value_t = 120)]
    pub grid_cols: u32,

    /// Grid rows.
    #[arg(long, default_value_t = 120)]
    pub grid_rows: u32,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Window size for the selected scene.
    pub fn window_size(&self) -> (u32, u32) {
        if self.grid {
            (1280, 920)
        } else {
            (600, 480)
        }
    }

    /// Renderer arguments for the selected scene. The grid scene sizes the
    /// instance store to exactly one slot per cell.
    pub fn renderer_config(&self) -> RendererConfig {
        let max_instances = if self.grid {
            self.grid_cols * self.grid_rows
        } else {
            self.max_instances
        };

        RendererConfig {
            vertex_shader: self.vertex_shader.clone(),
            fragment_shader: self.fragment_shader.clone(),
            max_instances,
            texture_layers: self.texture_layers,
            texture_width: self.texture_width,
            texture_height: self.texture_height,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_two_quad_scene() {
        let args = Args::try_parse_from(["quadra"]).unwrap();
        assert!(!args.grid);
        assert_eq!(args.window_size(), (600, 480));
        assert_eq!(args.max_instances, 100);
        assert_eq!(args.texture_layers, 2);

        let config = args.renderer_config();
        assert_eq!(config.max_instances, 100);
        assert_eq!(config.vertex_shader, PathBuf::from("res/quad.vert.wgsl"));
    }

    #[test]
    fn grid_sizes_instances_to_cell_count() {
        let args = Args::try_parse_from(["quadra", "--grid"]).unwrap();
        assert_eq!(args.window_size(), (1280, 920));
        assert_eq!(args.renderer_config().max_instances, 120 * 120);
    }

    #[test]
    fn textures_accumulate_in_order() {
        let args =
            Args::try_parse_from(["quadra", "--texture", "a.png", "--texture", "b.png"]).unwrap();
        assert_eq!(
            args.textures,
            vec![PathBuf::from("a.png"), PathBuf::from("b.png")]
        );
    }
}
