use xform::desc::{View, build_view_json};
use xform::{Rect, XformResult};

const SAMPLE_JSON: &str = r#"
    {
        "version": 1,
        "depth": "neg_one_to_one",
        "xform2": [
            { "op": "window", "w": 640, "h": 480 }
        ],
        "model": [
            { "op": "rotate", "yaw": 0.0, "pitch": 0.5, "roll": 0.0 },
            { "op": "translate", "x": 0.0, "y": 0.0, "z": -5.0 }
        ],
        "camera": {
            "kind": "perspective",
            "fov": 1.0471975511965976,
            "aspect": 1.3333333333333333,
            "near": 0.1,
            "far": 100.0
        }
    }
"#;

fn print_view(view: &View) {
    println!("xform2:\n{}\n", view.xform2);
    println!("model:\n{}\n", view.model);
    match &view.projection {
        Some(p) => println!("projection:\n{p}\n"),
        None => println!("projection: none\n"),
    }
    println!("mvp:\n{}\n", view.mvp);

    // Where the xform2 sends a sample rectangle, as-is and canonicalized.
    let rect = Rect::new(0.0, 0.0, 320.0, 240.0);
    let out = view.xform2.transform_rect(rect);
    println!("rect {rect:?}\n  -> {out:?}\n  canon {:?}", out.canon());
}

fn run() -> XformResult<()> {
    let json_text = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("reading view description from {path}");
            std::fs::read_to_string(&path).inspect_err(|err| log::error!("cannot read {path}: {err}"))?
        }
        None => {
            log::info!("no path given, using the built-in sample");
            SAMPLE_JSON.to_string()
        }
    };

    let view = build_view_json(&json_text)?;
    print_view(&view);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("xform: {err}");
        std::process::exit(1);
    }
}
