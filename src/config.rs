/*
 * Launch Configuration Module
 *
 * The scene has no runtime settings beyond the page variant it renders and
 * a few diagnostic switches, all taken from the command line.
 */

use clap::Parser;

use crate::params::{FieldParams, ParamsError, SwarmParams, Variant};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "lucid-swarm", version, about = "Pointer-attracted boids over a rotating particle field")]
pub struct Args {
    /// Page variant to render
    #[arg(long, value_enum, default_value_t = Variant::Landing)]
    pub variant: Variant,

    /// Seed for particle placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show the diagnostics window and overlay
    #[arg(long)]
    pub debug: bool,
}

/// Everything the app needs before the window opens.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub variant: Variant,
    pub seed: Option<u64>,
    pub debug: bool,
    pub swarm: SwarmParams,
    pub field: FieldParams,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        let variant = Variant::default();
        Self {
            variant,
            seed: None,
            debug: false,
            swarm: variant.swarm_params(),
            field: variant.field_params(),
        }
    }
}

impl LaunchConfig {
    pub fn from_args(args: Args) -> Result<Self, ParamsError> {
        let swarm = args.variant.swarm_params();
        let field = args.variant.field_params();
        swarm.validate()?;
        field.validate()?;

        Ok(Self {
            variant: args.variant,
            seed: args.seed,
            debug: args.debug,
            swarm,
            field,
        })
    }
}
