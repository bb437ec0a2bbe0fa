use pantheon::boss::BossKind;
use pantheon::constants::BACKGROUND_TILE_HEIGHT;
use pantheon::minion::MinionArchetype;
use pantheon::progression::{default_milestones, Milestone, MilestoneEffect, Progression};
use pantheon::stage::{Background, Stage};

use proptest::prelude::*;

// ── Milestone table ───────────────────────────────────────────────────────────

#[test]
fn default_table_is_sorted_and_opens_with_stage_one() {
    let table = default_milestones();
    assert_eq!(table.len(), 12);
    assert_eq!(table[0], Milestone::new(0, MilestoneEffect::Stage(Stage::One)));
    assert!(table.windows(2).all(|w| w[0].score <= w[1].score));
    assert_eq!(table[3].effect, MilestoneEffect::Boss(BossKind::Solar));
    assert_eq!(table[7].effect, MilestoneEffect::Boss(BossKind::Storm));
}

#[test]
fn checkpoints_are_stages_and_bosses() {
    assert!(MilestoneEffect::Stage(Stage::Two).is_checkpoint());
    assert!(MilestoneEffect::Boss(BossKind::Solar).is_checkpoint());
    assert!(!MilestoneEffect::Difficulty(0.8).is_checkpoint());
}

// ── Progression ───────────────────────────────────────────────────────────────

#[test]
fn one_milestone_per_check() {
    let table = default_milestones();
    let mut p = Progression::default();

    // 350 has passed three thresholds; they are crossed one call at a time.
    assert_eq!(p.check(350, &table).map(|(i, _)| i), Some(0));
    assert_eq!(p.check(350, &table).map(|(i, _)| i), Some(1));
    assert_eq!(p.check(350, &table).map(|(i, _)| i), Some(2));
    assert_eq!(p.check(350, &table), None);
    assert_eq!(p.index(), 3);
}

#[test]
fn boss_blocks_until_defeated() {
    let table = default_milestones();
    let mut p = Progression::default();
    while p.check(500, &table).is_some() {}
    assert_eq!(p.index(), 4);
    assert!(p.boss_active());
    assert_eq!(p.checkpoint(), 3);

    assert_eq!(p.check(100_000, &table), None);
    assert_eq!(p.index(), 4);

    p.boss_defeated();
    let (index, milestone) = p.check(1500, &table).unwrap();
    assert_eq!(index, 4);
    assert_eq!(milestone.effect, MilestoneEffect::Stage(Stage::Two));
    assert_eq!(p.checkpoint(), 4);
}

#[test]
fn exhausted_table_is_a_no_op() {
    let table = vec![Milestone::new(0, MilestoneEffect::Stage(Stage::One))];
    let mut p = Progression::default();
    assert!(p.check(0, &table).is_some());
    assert_eq!(p.check(u32::MAX, &table), None);
    assert_eq!(p.index(), 1);
    assert_eq!(Progression::default().check(10, &[]), None);
}

#[test]
fn rewind_returns_checkpoint_score() {
    let table = default_milestones();
    let mut p = Progression::default();
    while p.check(500, &table).is_some() {}
    assert!(p.boss_active());

    assert_eq!(p.rewind(&table), 500);
    assert_eq!(p.index(), 3);
    assert!(!p.boss_active());

    // The boss milestone fires again.
    let (index, milestone) = p.check(500, &table).unwrap();
    assert_eq!(index, 3);
    assert_eq!(milestone.effect, MilestoneEffect::Boss(BossKind::Solar));
}

#[test]
fn difficulty_milestones_do_not_move_the_checkpoint() {
    let table = default_milestones();
    let mut p = Progression::default();
    while p.check(300, &table).is_some() {}
    assert_eq!(p.checkpoint(), 0);
    assert_eq!(p.rewind(&table), 0);
}

proptest! {
    #[test]
    fn index_is_monotone(scores in proptest::collection::vec(0u32..12_000, 1..200)) {
        let table = default_milestones();
        let mut p = Progression::default();
        let mut last = 0;
        for score in scores {
            if p.check(score, &table).is_some() && p.boss_active() {
                p.boss_defeated();
            }
            prop_assert!(p.index() >= last);
            prop_assert!(p.index() <= last + 1);
            prop_assert!(p.checkpoint() <= p.index());
            last = p.index();
        }
    }
}

// ── Stages ────────────────────────────────────────────────────────────────────

#[test]
fn stage_rosters_grow() {
    assert_eq!(Stage::One.roster(), &[MinionArchetype::Raptor]);
    assert_eq!(
        Stage::Two.roster(),
        &[MinionArchetype::Raptor, MinionArchetype::Golem]
    );
    assert_eq!(Stage::Three.roster(), &MinionArchetype::ALL);
    assert_eq!(Stage::Extra.roster(), &MinionArchetype::ALL);
}

#[test]
fn stage_modifiers() {
    assert_eq!(Stage::Extra.label(), "EXTRA STAGE");
    assert_eq!(Stage::Two.label(), "STAGE 2");
    assert_eq!(Stage::Extra.spawn_scale(), Some(0.7));
    assert_eq!(Stage::Three.spawn_scale(), None);
    assert!(!Stage::Two.boosted_fire());
    assert!(Stage::Three.boosted_fire());
    assert!(Stage::Extra.scroll_speed() > Stage::One.scroll_speed());
}

#[test]
fn background_wraps_after_two_tiles() {
    let mut bg = Background::default();
    bg.set_speed(100.0);
    for _ in 0..7 {
        bg.advance();
    }
    assert_eq!(bg.offset(), 700.0);
    bg.advance();
    assert_eq!(bg.offset(), 0.0);
    assert!(bg.offset() < BACKGROUND_TILE_HEIGHT * 2.0);
    assert_eq!(bg.speed(), 100.0);
}
