use disturbance_engine::{
    EngineState, FieldConfig, FieldCore, FieldHandle, RasterSampler, Renderer, SettlePolicy,
};

/// Opaque disc of radius `r` centred in a `size x size` square.
struct Disc {
    size: u32,
    r: f32,
}

impl RasterSampler for Disc {
    fn sample(&self, x: u32, y: u32) -> [u8; 4] {
        let c = self.size as f32 / 2.0;
        let (dx, dy) = (x as f32 - c, y as f32 - c);
        if dx * dx + dy * dy <= self.r * self.r {
            [255, 64, 0, 255]
        } else {
            [0, 0, 0, 0]
        }
    }
}

struct CountingRenderer {
    cleared: u32,
    drawn: usize,
}

impl Renderer for CountingRenderer {
    fn clear(&mut self, _width: u32, _height: u32) {
        self.cleared += 1;
    }

    fn draw_particle(&mut self, _x: f32, _y: f32, _size: f32, _color: u32) {
        self.drawn += 1;
    }
}

#[test]
fn disc_sprite_full_lifecycle() {
    let disc = Disc { size: 64, r: 20.0 };
    let config = FieldConfig {
        pixel_size: 2,
        push_radius: 8.0,
        settle_policy: SettlePolicy::Deviation,
        ..FieldConfig::default()
    };
    let mut field = FieldCore::with_config(&disc, 64, 64, config).unwrap();
    assert!(!field.grid().is_dense());
    assert!(field.particle_count() > 0);

    field.on_pointer_enter();
    for step in 0..20 {
        field.on_pointer_move(20.0 + step as f32, 32.0);
        field.tick();
    }
    assert!(field.active_count() > 0);
    assert_eq!(field.state(), EngineState::Active);

    let mut renderer = CountingRenderer { cleared: 0, drawn: 0 };
    field.render(&mut renderer);
    assert_eq!(renderer.cleared, 1);
    assert_eq!(renderer.drawn, field.particle_count());

    field.on_pointer_leave();
    let mut ticks = 0;
    while field.tick() {
        ticks += 1;
        assert!(ticks < 2000);
    }
    assert!(field.is_idle());
    assert!(field
        .grid()
        .particles()
        .iter()
        .all(|p| !p.is_displaced_with(SettlePolicy::Deviation)));

    field.teardown();
    assert!(field.is_detached());
    assert!(!field.tick());
}

#[test]
fn handle_from_json_config() {
    let rgba = vec![200u8; 10 * 6 * 4];
    let json = r#"{"pixelSize": 2, "pushRadius": 5, "particleSize": 3, "settlePolicy": "deviation"}"#;
    let mut field = FieldHandle::from_config_json(&rgba, 10, 6, json.to_string()).unwrap();

    assert_eq!(field.width(), 10);
    assert_eq!(field.height(), 6);
    assert_eq!(field.particle_count(), 15);
    assert_eq!(field.particle_size(), 3.0);
    assert!(field.is_idle());

    let round_trip = FieldConfig::from_json(&field.config_json()).unwrap();
    assert_eq!(round_trip.pixel_size, 2);
    assert_eq!(round_trip.settle_policy, SettlePolicy::Deviation);

    field.pointer_enter();
    field.pointer_move(4.0, 2.0);
    assert!(field.tick());
    assert_eq!(field.frame(), 1);
    assert_eq!(field.dropped_count(), 0);

    field.extract_positions();
    assert_eq!(field.positions_len(), 30);
    assert_eq!(field.colors_len(), 15);

    field.teardown();
    assert!(field.is_idle());
    assert!(!field.tick());
}
