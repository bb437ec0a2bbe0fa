//! Pairwise collision resolution.
//!
//! Which rule applies to a pair is looked up from the participants' tags in
//! `RULES`; the rule then reads alignment, power and penetration to decide
//! the outcome. The player is never mutated here: hits on it are counted in
//! the report and applied by the session.

use crate::boss::BossKind;
use crate::constants::PENETRATOR_HIT_COST;
use crate::entities::{touching, Entity, GameObject, Player};
use crate::hostile::{Defeat, Hostile};
use crate::projectile::{Alignment, Projectile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Player = 0,
    Projectile = 1,
    Hostile = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Ignore,
    /// Projectile against projectile: power arbitration.
    Clash,
    /// Projectile against the player.
    Shot,
    /// Projectile against a hostile.
    Strike,
    /// Player body against a hostile body.
    Contact,
}

const RULES: [[Rule; 3]; 3] = [
    //  Player         Projectile    Hostile
    [Rule::Ignore, Rule::Shot, Rule::Contact],  // Player
    [Rule::Shot, Rule::Clash, Rule::Strike],    // Projectile
    [Rule::Contact, Rule::Strike, Rule::Ignore], // Hostile
];

pub fn rule_for(a: Tag, b: Tag) -> Rule {
    RULES[a as usize][b as usize]
}

/// Outcome of one resolution pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub score: u32,
    pub kills: u32,
    /// Damage events against the player; invincibility is applied later.
    pub player_hits: u32,
    pub defeated_bosses: Vec<BossKind>,
}

impl CollisionReport {
    fn credit(&mut self, defeat: Defeat) {
        self.score += defeat.points;
        self.kills += 1;
        if let Some(kind) = defeat.boss {
            self.defeated_bosses.push(kind);
        }
    }
}

enum Party<'a> {
    Player,
    Projectile(&'a mut Projectile),
    Hostile(&'a mut Hostile),
}

impl GameObject {
    pub fn tag(&self) -> Tag {
        match self {
            GameObject::Projectile(_) => Tag::Projectile,
            GameObject::Hostile(_) => Tag::Hostile,
        }
    }

    fn party(&mut self) -> Party<'_> {
        match self {
            GameObject::Projectile(p) => Party::Projectile(p),
            GameObject::Hostile(h) => Party::Hostile(h),
        }
    }
}

/// Resolve every overlapping pair among the player and the live objects.
/// Dead objects, including those killed earlier in the same pass, are
/// skipped.
pub fn resolve_all(player: &Player, objects: &mut [GameObject]) -> CollisionReport {
    let mut report = CollisionReport::default();

    for object in objects.iter_mut() {
        let rule = rule_for(Tag::Player, object.tag());
        if rule == Rule::Ignore || !touching(player, &*object) {
            continue;
        }
        apply(rule, Party::Player, object.party(), &mut report);
    }

    for j in 1..objects.len() {
        let (head, tail) = objects.split_at_mut(j);
        let b = &mut tail[0];
        for a in head.iter_mut() {
            if b.is_dead() {
                break;
            }
            let rule = rule_for(a.tag(), b.tag());
            if rule == Rule::Ignore || !touching(&*a, &*b) {
                continue;
            }
            apply(rule, a.party(), b.party(), &mut report);
        }
    }

    report
}

fn apply(rule: Rule, a: Party<'_>, b: Party<'_>, report: &mut CollisionReport) {
    match (rule, a, b) {
        (Rule::Clash, Party::Projectile(p), Party::Projectile(q)) => clash(p, q),
        (Rule::Shot, Party::Projectile(p), Party::Player)
        | (Rule::Shot, Party::Player, Party::Projectile(p)) => shot(p, report),
        (Rule::Strike, Party::Projectile(p), Party::Hostile(h))
        | (Rule::Strike, Party::Hostile(h), Party::Projectile(p)) => strike(p, h, report),
        (Rule::Contact, _, _) => report.player_hits += 1,
        _ => {}
    }
}

/// Projectile against projectile. Same side never interacts; otherwise the
/// higher tier wins and wears by the loser's damage, equal tiers trade.
pub fn clash(p: &mut Projectile, q: &mut Projectile) {
    if p.alignment == q.alignment || p.is_dead() || q.is_dead() {
        return;
    }
    if p.power == q.power {
        p.mark_dead();
        q.mark_dead();
        return;
    }
    let (winner, loser) = if p.power > q.power { (p, q) } else { (q, p) };
    loser.mark_dead();
    winner.wear(loser.damage);
}

/// Enemy projectile reaching the player.
pub fn shot(p: &mut Projectile, report: &mut CollisionReport) {
    if p.alignment != Alignment::Enemy || p.is_dead() {
        return;
    }
    report.player_hits += 1;
    if !p.penetrating {
        p.mark_dead();
    }
}

/// Player projectile reaching a hostile.
pub fn strike(p: &mut Projectile, h: &mut Hostile, report: &mut CollisionReport) {
    if p.alignment != Alignment::Player || p.is_dead() || h.is_dead() {
        return;
    }
    if let Some(defeat) = h.take_damage(p.damage) {
        report.credit(defeat);
    }
    if p.penetrating {
        p.wear(PENETRATOR_HIT_COST);
    } else {
        p.mark_dead();
    }
}
