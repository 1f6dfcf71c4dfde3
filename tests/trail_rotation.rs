use coming_soon::trail::{Point, Size, TilePhase, TrailConfig, TrailSession, Trigger};

const FRAME_MS: f64 = 16.0;

fn sized_session(pool: usize) -> TrailSession {
    let mut session = TrailSession::new(pool, TrailConfig::default());
    for i in 0..pool {
        session.measure(i, Size::new(120.0, 140.0));
    }
    session
}

/// Feeds one sample per frame and collects every trigger.
fn drive(session: &mut TrailSession, path: &[Point], start: f64) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    for (i, point) in path.iter().enumerate() {
        session.pointer_moved(*point);
        if let Some(trigger) = session.frame(start + i as f64 * FRAME_MS).trigger {
            triggers.push(trigger);
        }
    }
    triggers
}

fn horizontal(from: f64, to: f64, step: f64) -> Vec<Point> {
    let mut path = Vec::new();
    let mut x = from;
    while x <= to {
        path.push(Point::new(x, 200.0));
        x += step;
    }
    path
}

#[test]
fn small_moves_never_trigger() {
    let mut session = sized_session(3);
    // wobble around the entry point without ever leaving an 80px radius
    let path: Vec<Point> = (0..200)
        .map(|i| {
            let angle = i as f64 * 0.3;
            Point::new(300.0 + 79.0 * angle.cos(), 300.0 + 79.0 * angle.sin())
        })
        .collect();
    session.pointer_moved(Point::new(300.0, 300.0));
    assert!(drive(&mut session, &path, 0.0).is_empty());
    assert_eq!(session.z_counter(), 0);
    assert_eq!(session.active_count(), 0);
}

#[test]
fn five_crossings_rotate_through_three_tiles() {
    let mut session = sized_session(3);
    // 81px per frame crosses the threshold on every frame after the first
    let path = horizontal(0.0, 405.0, 81.0);
    assert_eq!(path.len(), 6);

    let triggers = drive(&mut session, &path, 0.0);
    let order: Vec<usize> = triggers.iter().map(|t| t.tile).collect();
    let z: Vec<u32> = triggers.iter().map(|t| t.z_index).collect();
    assert_eq!(order, [0, 1, 2, 0, 1]);
    assert_eq!(z, [1, 2, 3, 4, 5]);
    assert_eq!(session.cursor(), 2);
}

#[test]
fn slow_line_triggers_once_per_threshold() {
    let mut session = sized_session(4);
    // 10px per frame over 405px: distance exceeds 80 on every ninth step
    let path = horizontal(0.0, 405.0, 10.0);
    let triggers = drive(&mut session, &path, 0.0);
    assert_eq!(triggers.len(), 4);
    for pair in triggers.windows(2) {
        assert_eq!(pair[1].z_index, pair[0].z_index + 1);
        assert_eq!(pair[1].tile, (pair[0].tile + 1) % 4);
    }
}

#[test]
fn active_count_drains_to_zero() {
    let mut session = sized_session(3);
    let path = horizontal(0.0, 810.0, 81.0);
    let triggers = drive(&mut session, &path, 0.0);
    assert_eq!(triggers.len(), 10);
    assert!(session.active_count() <= 3);
    assert!(!session.is_idle());

    let mut now = path.len() as f64 * FRAME_MS;
    let end = now + session.config().timing.total() + FRAME_MS;
    while now <= end {
        session.frame(now);
        now += FRAME_MS;
    }
    assert_eq!(session.active_count(), 0);
    assert!(session.is_idle());
    assert!(session.tiles().iter().all(|t| t.phase() == TilePhase::Idle));
    // keeps sampling after going idle
    session.pointer_moved(Point::new(2_000.0, 200.0));
    assert!(session.frame(now).trigger.is_some());
}

#[test]
fn retriggered_tile_shows_only_the_new_activation() {
    let mut session = sized_session(1);
    drive(&mut session, &horizontal(0.0, 81.0, 81.0), 0.0);
    let first = *session.tile(0).unwrap().activation().unwrap();

    session.pointer_moved(Point::new(600.0, 500.0));
    let report = session.frame(700.0);
    assert_eq!(report.trigger.map(|t| t.z_index), Some(2));

    let tile = session.tile(0).unwrap();
    let second = tile.activation().unwrap();
    assert_ne!(first, *second);
    assert_eq!(second.started_at, 700.0);
    assert_eq!(second.to, Point::new(540.0, 430.0));
    assert_eq!(tile.style().opacity, 1.0);
    assert_eq!(tile.style().scale, 1.0);
    assert_eq!(tile.style().z_index, 2);
    assert_eq!(session.active_count(), 1);
}

#[test]
fn empty_pool_never_triggers() {
    let mut session = TrailSession::new(0, TrailConfig::default());
    let triggers = drive(&mut session, &horizontal(0.0, 810.0, 81.0), 0.0);
    assert!(triggers.is_empty());
    assert_eq!(session.z_counter(), 0);
    assert!(session.is_idle());
}
