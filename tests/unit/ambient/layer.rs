use super::*;

fn layer(seed: u64) -> AmbientLayer {
    AmbientLayer::new(AmbientConfig::default(), Viewport::default(), seed).unwrap()
}

fn count(layer: &AmbientLayer, kind: GlyphKind) -> usize {
    layer.glyphs().iter().filter(|g| g.kind == kind).count()
}

#[test]
fn default_pool_sizes() {
    let l = layer(1);
    assert_eq!(l.glyphs().len(), 22);
    assert_eq!(count(&l, GlyphKind::Heart), 12);
    assert_eq!(count(&l, GlyphKind::Sparkle), 6);
    assert_eq!(count(&l, GlyphKind::Petal), 4);
}

#[test]
fn sampled_parameters_respect_ranges() {
    let l = layer(3);
    let vp = Viewport::default();
    for g in l.glyphs() {
        assert!((0.0..vp.width).contains(&g.origin.x));
        match g.kind {
            GlyphKind::Heart => {
                assert!(HEART_PALETTE.contains(&g.emoji));
                assert!((1.2..2.7).contains(&g.scale));
                assert!((8_000..14_000).contains(&g.clock.period.0));
                assert!(g.clock.delay.0 < 8_000);
                assert!((40.0..120.0).contains(&g.sway));
            }
            GlyphKind::Sparkle => {
                assert_eq!(g.emoji, SPARKLE_GLYPH);
                assert_eq!(g.clock.period, Millis(3_000));
                assert!((0.0..vp.height).contains(&g.origin.y));
            }
            GlyphKind::Petal => {
                assert_eq!(g.emoji, PETAL_GLYPH);
                assert!((12_000..20_000).contains(&g.clock.period.0));
                assert_eq!(g.sway, 60.0);
            }
        }
    }
}

#[test]
fn same_seed_same_pool() {
    assert_eq!(layer(11).glyphs(), layer(11).glyphs());
    assert_ne!(layer(11).glyphs(), layer(12).glyphs());
}

#[test]
fn glyph_is_hidden_until_start_delay() {
    let l = layer(5);
    let g = l
        .glyphs()
        .iter()
        .find(|g| g.clock.delay.0 > 0)
        .unwrap()
        .clone();
    let f = l.sample_glyph(&g, Millis(g.clock.delay.0 - 1));
    assert_eq!(f.iteration, None);
    assert_eq!(f.opacity, 0.0);
    assert_eq!(f.scale, 0.0);
}

#[test]
fn hearts_rise_and_petals_fall() {
    let l = layer(8);
    let vp = Viewport::default();
    for g in l.glyphs() {
        let start = l.sample_glyph(g, g.clock.delay);
        let mid = l.sample_glyph(g, g.clock.delay.saturating_add(Millis(g.clock.period.0 / 2)));
        match g.kind {
            GlyphKind::Heart => {
                assert_eq!(start.position.y, vp.height + 100.0);
                assert!(mid.position.y < start.position.y);
            }
            GlyphKind::Petal => {
                assert_eq!(start.position.y, -100.0);
                assert!(mid.position.y > start.position.y);
            }
            GlyphKind::Sparkle => assert_eq!(start.position.y, mid.position.y),
        }
        assert_eq!(start.opacity, 0.0);
        assert!(mid.opacity > 0.0);
        assert_eq!(start.iteration, Some(0));
    }
}

#[test]
fn trajectories_loop_forever() {
    let l = layer(9);
    let g = &l.glyphs()[0];
    let t = g.clock.delay.saturating_add(Millis(1234));
    let later = t.saturating_add(Millis(g.clock.period.0 * 3));
    let a = l.sample_glyph(g, t);
    let b = l.sample_glyph(g, later);
    assert_eq!(a.position, b.position);
    assert_eq!(a.opacity, b.opacity);
    assert_eq!(b.iteration, Some(3));
}

#[test]
fn heart_rotation_completes_full_turn() {
    let l = layer(2);
    let g = l
        .glyphs()
        .iter()
        .find(|g| g.kind == GlyphKind::Heart)
        .unwrap();
    let end = g
        .clock
        .delay
        .saturating_add(Millis(g.clock.period.0 - 1));
    assert!(l.sample_glyph(g, end).rotation_deg > 359.0);
}

#[test]
fn resize_keeps_pool_and_rescales_bounds() {
    let mut l = layer(4);
    let before = l.glyphs().to_vec();
    let narrow = Viewport::new(600.0, 400.0).unwrap();
    l.resize(narrow).unwrap();

    assert_eq!(l.glyphs(), &before[..]);
    assert_eq!(l.viewport(), narrow);
    for g in l.glyphs() {
        let f = l.sample_glyph(g, g.clock.delay);
        assert!(f.position.x >= 0.0 && f.position.x < narrow.width);
        if g.kind == GlyphKind::Heart {
            assert_eq!(f.position.y, narrow.height + 100.0);
        }
    }
}

#[test]
fn invalid_pool_config_is_rejected() {
    let mut cfg = AmbientConfig::default();
    cfg.hearts.scale = Span::new(3.0, 1.0);
    assert!(AmbientLayer::new(cfg, Viewport::default(), 0).is_err());

    let mut cfg = AmbientConfig::default();
    cfg.petals.period = Span::fixed(Millis(0));
    assert!(cfg.validate().is_err());
}

#[test]
fn empty_pools_are_allowed() {
    let mut cfg = AmbientConfig::default();
    cfg.sparkles.count = 0;
    cfg.sparkles.period = Span::fixed(Millis(0));
    let l = AmbientLayer::new(cfg, Viewport::default(), 0).unwrap();
    assert_eq!(l.glyphs().len(), 16);
}

#[test]
fn pool_size_reports_overflow() {
    let mut cfg = AmbientConfig::default();
    assert_eq!(cfg.pool_size().unwrap(), 22);
    cfg.hearts.count = usize::MAX;
    assert!(matches!(cfg.pool_size(), Err(StoryError::Validation(_))));
    assert!(cfg.validate().is_err());
}
