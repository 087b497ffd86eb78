//! # rc_probe
//!
//! Command-line front end for the `rc_math` and `rc_utils` helpers. Useful
//! for checking what a projection matrix or packed normal looks like without
//! writing a test.
//!
//! ```text
//! rc_probe mips width=300 height=1
//! rc_probe projection fov=60 aspect=1.777 near=0.1 far=1000
//! rc_probe pack x=0 y=1 z=0
//! rc_probe split path="C:\data\tree.mesh"
//! rc_probe hexdump file=shader.spv
//! ```
//!
//! Results are printed as JSON on stdout. Set `RUST_LOG=debug` for detail.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rc_math::{
    Matrix4x4, Vector3, calculate_projection_matrix, num_mips, pack_normal_to_u32, to_radians,
};
use rc_utils::CmdLine;

/// Bytes shown by `hexdump`.
const HEXDUMP_BYTES: usize = 32;

#[derive(Debug, Serialize)]
struct MipsReport {
    width: u32,
    height: u32,
    mips: u32,
}

#[derive(Debug, Serialize)]
struct ProjectionReport {
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    matrix: Matrix4x4,
}

#[derive(Debug, Serialize)]
struct PackReport {
    normal: Vector3,
    packed: String,
}

#[derive(Debug, Serialize)]
struct SplitReport<'a> {
    directory: &'a str,
    filename: &'a str,
    extension: &'a str,
}

#[derive(Debug, Serialize)]
struct HexdumpReport {
    path: String,
    size: usize,
    head: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = CmdLine::from_env()?;
    let Some(command) = cmd.args.first() else {
        bail!("usage: rc_probe <mips|projection|pack|split|hexdump> [key=value ...]");
    };
    info!(command = %command, "running probe");

    let json = match command.to_ascii_lowercase().as_str() {
        "mips" => serde_json::to_string_pretty(&mips(&cmd)?)?,
        "projection" => serde_json::to_string_pretty(&projection(&cmd)?)?,
        "pack" => serde_json::to_string_pretty(&pack(&cmd)?)?,
        "split" => {
            let path = rc_utils::strip_quotes(required_string(&cmd, "path")?);
            let parts = rc_utils::split_path(path);
            serde_json::to_string_pretty(&SplitReport {
                directory: parts.directory,
                filename: parts.filename,
                extension: parts.extension,
            })?
        }
        "hexdump" => serde_json::to_string_pretty(&hexdump(&cmd)?)?,
        other => bail!("unknown command {other:?}"),
    };
    println!("{json}");
    Ok(())
}

fn required_string<'a>(cmd: &'a CmdLine, key: &str) -> Result<&'a str> {
    cmd.try_get_string(key)
        .with_context(|| format!("missing required argument {key}=..."))
}

fn required_float(cmd: &CmdLine, key: &str) -> Result<f32> {
    cmd.try_get_float(key)?
        .with_context(|| format!("missing required argument {key}=..."))
}

fn mips(cmd: &CmdLine) -> Result<MipsReport> {
    let width = cmd.try_get::<u32>("width")?.context("missing width=...")?;
    let height = cmd.try_get::<u32>("height")?.unwrap_or(width);
    Ok(MipsReport {
        width,
        height,
        mips: num_mips(width, height),
    })
}

fn projection(cmd: &CmdLine) -> Result<ProjectionReport> {
    let fov_degrees = cmd.try_get_float("fov")?.unwrap_or(60.0);
    let aspect = cmd.try_get_float("aspect")?.unwrap_or(16.0 / 9.0);
    let near = required_float(cmd, "near")?;
    let far = required_float(cmd, "far")?;
    if near <= 0.0 || far <= near {
        bail!("expected 0 < near < far, got near={near} far={far}");
    }
    let matrix = calculate_projection_matrix(to_radians(fov_degrees), aspect, near, far);
    debug!(?matrix, "built projection");
    Ok(ProjectionReport {
        fov_degrees,
        aspect,
        near,
        far,
        matrix,
    })
}

fn pack(cmd: &CmdLine) -> Result<PackReport> {
    let normal = Vector3::new(
        required_float(cmd, "x")?,
        required_float(cmd, "y")?,
        required_float(cmd, "z")?,
    );
    let normal = if cmd.contains("-normalize") {
        normal
            .try_normalize()
            .context("cannot normalize a zero-length vector")?
    } else {
        normal
    };
    Ok(PackReport {
        normal,
        packed: format!("{:#010x}", pack_normal_to_u32(normal)),
    })
}

fn hexdump(cmd: &CmdLine) -> Result<HexdumpReport> {
    let path = rc_utils::strip_quotes(required_string(cmd, "file")?);
    let data = rc_utils::load_file(path)?;
    let head = data
        .iter()
        .take(HEXDUMP_BYTES)
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HexdumpReport {
        path: path.to_string(),
        size: data.len(),
        head,
    })
}
