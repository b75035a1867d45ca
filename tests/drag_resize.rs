use resizable_sidebar::{DragHandler, PointerEvent, ResizableSidebar, SidebarConfig};

fn gesture(start_x: f32, moves: &[f32]) -> Vec<PointerEvent> {
    let mut events = vec![PointerEvent::Press { x: start_x }];
    events.extend(moves.iter().map(|&x| PointerEvent::Move { x }));
    events.push(PointerEvent::Release);
    events
}

#[test]
fn documented_scenarios() {
    for (delta, expected) in [(200.0, 400.0), (-300.0, 100.0), (50.0, 300.0)] {
        let mut sidebar = ResizableSidebar::new("scenario", SidebarConfig::default());
        assert_eq!(sidebar.width(), 250.0);

        sidebar.apply(&gesture(255.0, &[255.0 + delta]));
        assert_eq!(sidebar.width(), expected, "delta {delta}");
        assert!(!sidebar.is_dragging());
    }
}

#[test]
fn every_move_updates_the_width() {
    let config = SidebarConfig::default();
    let bounds = config.bounds();
    let mut handler = DragHandler::new();
    let mut width = config.initial_width();
    let mut seen = Vec::new();

    for event in gesture(0.0, &[10.0, 20.0, 30.0, 500.0, -500.0]) {
        if let Some(new_width) = handler.handle(event, width, bounds) {
            width = new_width;
            seen.push(width);
        }
    }

    assert_eq!(seen, vec![260.0, 270.0, 280.0, 400.0, 100.0]);
}

#[test]
fn consecutive_gestures_start_from_the_last_width() {
    let mut sidebar = ResizableSidebar::new("consecutive", SidebarConfig::default());

    sidebar.apply(&gesture(255.0, &[275.0]));
    assert_eq!(sidebar.width(), 270.0);

    sidebar.apply(&gesture(275.0, &[245.0]));
    assert_eq!(sidebar.width(), 240.0);

    assert!(!sidebar.apply(&[PointerEvent::Move { x: 900.0 }]));
    assert_eq!(sidebar.width(), 240.0);
}

#[test]
fn custom_bounds_from_ron() {
    let config =
        SidebarConfig::from_ron("(default_width: 180.0, min_width: 150.0, max_width: 220.0)")
            .unwrap();
    let mut sidebar = ResizableSidebar::new("ron", config);
    assert_eq!(sidebar.width(), 180.0);

    sidebar.apply(&gesture(0.0, &[100.0]));
    assert_eq!(sidebar.width(), 220.0);
}
