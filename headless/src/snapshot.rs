use bevy_log::info;
use ron::ser::PrettyConfig;
use sim::SceneSnapshot;
use std::{fs::File, io::Write, path::Path};

pub fn save_snapshot(
    snapshot: &SceneSnapshot,
    file_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(snapshot, pretty_config)?;
    let mut file = File::create(file_path)?;
    file.write_all(serialized.as_bytes())?;
    info!("Snapshot saved to {}", file_path.display());
    Ok(())
}

pub fn load_snapshot(file_path: &Path) -> Result<SceneSnapshot, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(ron::de::from_str(&contents)?)
}
