use std::collections::HashSet;

use pantheon::constants::*;
use pantheon::entities::{Body, Entity, FrameContext, IdAllocator, ObjectId, Sprite};
use pantheon::geometry::Shape;
use pantheon::projectile::{Alignment, PowerLevel, Projectile, ProjectileKind};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn step(projectile: &mut Projectile, rng: &mut StdRng) {
    let live = HashSet::new();
    let mut ids = IdAllocator::default();
    let mut ctx = FrameContext::new(rng, (300.0, 800.0), &live, &mut ids);
    projectile.advance(&mut ctx);
    assert!(ctx.into_spawns().is_empty());
}

fn player_body() -> Body {
    Body::new(
        ObjectId(0),
        250.0,
        FIELD_BOTTOM - PLAYER_HEIGHT,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
    )
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

#[test]
fn dart_is_light_player_shot() {
    let dart = Projectile::dart(ObjectId(1), 300.0, 700.0);
    assert_eq!(dart.alignment, Alignment::Player);
    assert_eq!(dart.power, PowerLevel::Light);
    assert_eq!(dart.power.tier(), 1);
    assert_eq!(dart.damage, DART_DAMAGE);
    assert!(!dart.penetrating);
    assert_eq!(dart.hp(), None);
    assert_eq!(dart.body.center_x(), 300.0);
    assert_eq!(dart.body.bottom(), 700.0);
    assert_eq!(dart.sprite(), Sprite::Dart);
}

#[test]
fn rock_is_heavy_and_round() {
    let rock = Projectile::rock(ObjectId(1), 300.0, 200.0);
    assert_eq!(rock.power, PowerLevel::Heavy);
    assert_eq!(rock.damage, ROCK_DAMAGE);
    assert!(rock.is_enemy());
    assert!(matches!(rock.hit_shape(), Shape::Ellipse(_)));
}

#[test]
fn player_ultimates_carry_integrity() {
    let mut rng = seeded_rng();
    let body = player_body();
    let flare = Projectile::player_flare(ObjectId(1), &body, &mut rng);
    let bolt = Projectile::player_bolt(ObjectId(2), &body);

    assert_eq!(flare.hp(), Some(FLARE_HP));
    assert_eq!(bolt.hp(), Some(BOLT_HP));
    for p in [&flare, &bolt] {
        assert_eq!(p.power, PowerLevel::Ultimate);
        assert!(p.penetrating);
        assert_eq!(p.alignment, Alignment::Player);
    }
}

#[test]
fn enemy_ultimates_never_wear() {
    let mut bolt = Projectile::enemy_bolt(ObjectId(1), 100.0, 100.0, false);
    assert_eq!(bolt.hp(), None);
    bolt.wear(100);
    assert!(!bolt.is_dead());
}

#[test]
fn enraged_bolt_is_faster_and_recoloured() {
    let calm = Projectile::enemy_bolt(ObjectId(1), 100.0, 100.0, false);
    let angry = Projectile::enemy_bolt(ObjectId(2), 100.0, 100.0, true);
    assert_eq!(calm.velocity(), (0.0, BOLT_SPEED));
    assert_eq!(angry.velocity(), (0.0, BOLT_SPEED_ENRAGED));
    assert_eq!(angry.sprite(), Sprite::Bolt { enraged: true });
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[test]
fn dart_flies_up_and_dies_above_field() {
    let mut rng = seeded_rng();
    let mut dart = Projectile::dart(ObjectId(1), 300.0, 700.0);
    let y0 = dart.body.y;
    step(&mut dart, &mut rng);
    assert_eq!(dart.body.y, y0 - DART_SPEED);

    let mut frames = 1;
    while !dart.is_dead() {
        step(&mut dart, &mut rng);
        frames += 1;
        assert!(frames < 100, "dart never left the field");
    }
    assert!(dart.body.bottom() < FIELD_TOP);
}

#[test]
fn quill_falls_and_dies_below_field() {
    let mut rng = seeded_rng();
    let mut quill = Projectile::quill(ObjectId(1), 300.0, 700.0);
    step(&mut quill, &mut rng);
    assert_eq!(quill.body.y, 700.0 + QUILL_SPEED);
    while !quill.is_dead() {
        step(&mut quill, &mut rng);
    }
    assert!(quill.body.y > FIELD_BOTTOM);
}

#[test]
fn rock_accelerates_from_rest() {
    let mut rng = seeded_rng();
    let mut rock = Projectile::rock(ObjectId(1), 300.0, 100.0);
    step(&mut rock, &mut rng);
    let first = rock.body.y - 100.0;
    step(&mut rock, &mut rng);
    let second = rock.body.y - 100.0 - first;
    assert!((first - ROCK_GRAVITY).abs() < 1e-4);
    assert!((second - 2.0 * ROCK_GRAVITY).abs() < 1e-4);
}

#[test]
fn enemy_flare_angle_stays_in_band() {
    let thrower = Body::new(ObjectId(0), 200.0, FIELD_TOP, SOLAR_WIDTH, SOLAR_HEIGHT);
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        for heading in [1.0f32, -1.0] {
            let flare = Projectile::enemy_flare(ObjectId(1), &thrower, heading, false, &mut rng);
            let (vx, vy) = flare.velocity();
            assert!(vy > 0.0, "flare must head downward");
            assert_eq!(vx.signum(), heading);
            let angle = vy.atan2(vx.abs()).to_degrees();
            assert!(
                (FLARE_MIN_ANGLE_DEG - 0.01..=FLARE_MAX_ANGLE_DEG + 0.01).contains(&angle),
                "angle {angle} out of band"
            );
            let speed = vx.hypot(vy);
            assert!((speed - FLARE_SPEED).abs() < 1e-3);
        }
    }
}

#[test]
fn enemy_flare_spawns_on_heading_side() {
    let mut rng = seeded_rng();
    let thrower = Body::new(ObjectId(0), 200.0, FIELD_TOP, SOLAR_WIDTH, SOLAR_HEIGHT);
    let right = Projectile::enemy_flare(ObjectId(1), &thrower, 1.0, false, &mut rng);
    let left = Projectile::enemy_flare(ObjectId(2), &thrower, -1.0, false, &mut rng);
    assert_eq!(right.body.x, thrower.right());
    assert_eq!(left.body.right(), thrower.x);
}

#[test]
fn flare_bounces_off_side_wall() {
    let mut rng = seeded_rng();
    let thrower = Body::new(
        ObjectId(0),
        FIELD_WIDTH - SOLAR_WIDTH,
        FIELD_TOP,
        SOLAR_WIDTH,
        SOLAR_HEIGHT,
    );
    // Spawned past the right wall, heading right.
    let mut flare = Projectile::enemy_flare(ObjectId(1), &thrower, 1.0, false, &mut rng);
    step(&mut flare, &mut rng);
    assert_eq!(flare.body.right(), FIELD_WIDTH);
    assert!(flare.velocity().0 < 0.0);

    for _ in 0..200 {
        if flare.is_dead() {
            break;
        }
        step(&mut flare, &mut rng);
        assert!(flare.body.x >= 0.0);
        assert!(flare.body.right() <= FIELD_WIDTH + 1e-3);
    }
}

#[test]
fn player_flare_launches_upward_inside_walls() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut body = player_body();
        body.x = 0.0;
        let flare = Projectile::player_flare(ObjectId(1), &body, &mut rng);
        assert!(flare.body.x >= 0.0);
        assert!(flare.body.right() <= FIELD_WIDTH);
        assert!(flare.velocity().1 < 0.0);
        assert_eq!(flare.kind, ProjectileKind::Flare);
    }
}

// ── Wear ──────────────────────────────────────────────────────────────────────

#[test]
fn player_flare_shrinks_around_its_centre() {
    let mut rng = seeded_rng();
    let mut flare = Projectile::player_flare(ObjectId(1), &player_body(), &mut rng);
    let centre = flare.body.center();
    flare.wear(5);
    assert_eq!(flare.hp(), Some(FLARE_HP - 5));
    let expected = FLARE_SIZE * (FLARE_HP - 5) as f32 / FLARE_HP as f32;
    assert!((flare.body.width - expected).abs() < 1e-3);
    assert!((flare.body.height - expected).abs() < 1e-3);
    let (cx, cy) = flare.body.center();
    assert!((cx - centre.0).abs() < 1e-3 && (cy - centre.1).abs() < 1e-3);
}

#[test]
fn bolt_keeps_its_size_while_wearing() {
    let mut bolt = Projectile::player_bolt(ObjectId(1), &player_body());
    bolt.wear(3);
    assert_eq!(bolt.hp(), Some(BOLT_HP - 3));
    assert_eq!(bolt.body.width, BOLT_WIDTH);
    assert_eq!(bolt.body.height, BOLT_HEIGHT);
}

#[test]
fn wear_down_to_zero_kills() {
    let mut bolt = Projectile::player_bolt(ObjectId(1), &player_body());
    bolt.wear(BOLT_HP - 1);
    assert!(!bolt.is_dead());
    bolt.wear(1);
    assert!(bolt.is_dead());
}

#[test]
fn builder_sets_traits() {
    let p = Projectile::new(
        ObjectId(7),
        ProjectileKind::Quill,
        0.0,
        0.0,
        5.0,
        5.0,
        Alignment::Enemy,
        PowerLevel::Heavy,
        3,
    )
    .penetrating()
    .with_integrity(4)
    .round()
    .with_velocity(1.0, 2.0);
    assert!(p.penetrating);
    assert_eq!(p.hp(), Some(4));
    assert!(matches!(p.hit_shape(), Shape::Ellipse(_)));
    assert_eq!(p.velocity(), (1.0, 2.0));
}
