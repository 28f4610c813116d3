use cloudtex::{BaseShapeConfig, Error, ErosionConfig, VolumePair, atlas};
use std::path::Path;
use std::time::Instant;

const OUT_DIR: &str = "assets/textures";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let out_dir = Path::new(OUT_DIR);
    std::fs::create_dir_all(out_dir)?;

    let start = Instant::now();
    let base = cloudtex::base_shape(&BaseShapeConfig::default())?;
    log::info!("base shape volume generated in {:?}", start.elapsed());
    write_pair(&base, out_dir, "noise_shape.png", "noise_shape_packed.png")?;

    let start = Instant::now();
    let detail = cloudtex::erosion(&ErosionConfig::default())?;
    log::info!("erosion volume generated in {:?}", start.elapsed());
    write_pair(
        &detail,
        out_dir,
        "noise_erosion.png",
        "noise_erosion_packed.png",
    )?;

    Ok(())
}

fn write_pair(
    pair: &VolumePair,
    dir: &Path,
    texels_name: &str,
    packed_name: &str,
) -> Result<(), Error> {
    for (volume, name) in [(&pair.texels, texels_name), (&pair.packed, packed_name)] {
        let path = dir.join(name);
        atlas::pack(volume).write_png(&path)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}
