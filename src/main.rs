use sylva::Viewer;

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder().with_title("Sylva");
    if let Some(scene) = std::env::args().nth(1) {
        builder = builder.with_scene(scene);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
