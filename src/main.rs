use mp3_tag_strip::{cli, StripProfile};

fn main() {
    env_logger::init();

    if let Err(e) = cli::main_with_profile(StripProfile::Comments) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
