use globeview::{
    core::{config::ViewerOptions, geo::LatLng, geo::Point},
    input::events::{InputEvent, KeyCode, MouseButton, ScrollDirection},
    render::frame::QuadSource,
    Projection, Viewer,
};
use instant::Instant;

/// Drives the viewer through a scripted session without a window: a drag
/// with inertia, anchored wheel zooms, and a projection toggle, printing a
/// summary of each rendered frame.
fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    let start = Instant::now();
    let now_us = move || start.elapsed().as_micros() as i64;

    let options = ViewerOptions {
        center: LatLng::new(52.379, 4.900), // Amsterdam
        zoom: 10,
        screen: Point::new(800.0, 600.0),
        ..Default::default()
    };
    let mut viewer = Viewer::new(&options)?;

    println!("globeview headless session");
    println!("==========================");
    report("initial view", viewer.render());

    // Drag west and release while still moving: inertia takes over.
    viewer.handle_event(
        InputEvent::ButtonPress {
            position: Point::new(400.0, 300.0),
            button: MouseButton::Left,
        },
        now_us(),
    );
    for step in 1..=5 {
        viewer.handle_event(
            InputEvent::Motion {
                position: Point::new(400.0 - 30.0 * step as f64, 300.0),
            },
            now_us(),
        );
    }
    viewer.handle_event(
        InputEvent::ButtonRelease {
            position: Point::new(250.0, 300.0),
            button: MouseButton::Left,
        },
        now_us(),
    );
    println!(
        "released drag, autoscroll active: {}",
        viewer.viewport().autoscroll().active()
    );

    // Let the kinetic scroll decay over a few simulated frames.
    let mut ticks = 0;
    while viewer.viewport().autoscroll().active() && ticks < 600 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        if viewer.tick(now_us()) {
            viewer.render();
        }
        ticks += 1;
    }
    report("after inertia", viewer.render());

    // Two anchored zooms on the same screen point.
    for _ in 0..2 {
        viewer.handle_event(
            InputEvent::Scroll {
                direction: ScrollDirection::Up,
                position: Point::new(600.0, 200.0),
            },
            now_us(),
        );
    }
    report("after zooming in", viewer.render());

    // Globe mode, same geographic center.
    viewer.handle_event(InputEvent::KeyPress { key: KeyCode::S }, now_us());
    assert_eq!(viewer.viewport().mode(), Projection::Spherical);
    report("spherical mode", viewer.render());

    Ok(())
}

fn report(label: &str, frame: &globeview::Frame) {
    let tiles = frame
        .quads()
        .iter()
        .filter(|q| matches!(q.source, QuadSource::Tile(_)))
        .count();
    println!("{label}: {} quads, {} map tiles", frame.len(), tiles);
}
