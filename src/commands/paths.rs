use super::config::Config;

/// Print the resolved configuration values.
pub fn paths(config: &Config) {
    println!("root = {}", config.root.display());
    for (key, value) in config.installer.entries() {
        println!("{} = {}", key, value);
    }
    println!("composer = {}", config.installer.composer);
    println!("bootstrap = {}", config.bootstrap);
}
