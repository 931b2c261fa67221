// ═══════════════════════════════════════════════════════════════════════
// Text rendering — map table, mission panel, menu and battle reports.
// Everything returns a String so the callers decide where it goes.
// ═══════════════════════════════════════════════════════════════════════

use std::fmt::Write;
use war_engine::battle::{BattleOutcome, Side, Verdict};
use war_engine::map::WorldMap;
use war_engine::types::Objective;

const RULE: &str = "----------------------------------------";

pub fn map_table(map: &WorldMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== WORLD MAP ===");
    let _ = writeln!(out, "{:<3} | {:<25} | {:<10} | {}", "ID", "Territory", "Army", "Troops");
    let _ = writeln!(out, "----|---------------------------|------------|--------");
    for (i, t) in map.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<3} | {:<25} | {:<10} | {}",
            i + 1,
            t.name(),
            t.faction.to_string(),
            t.troops
        );
    }
    let _ = writeln!(out, "===============================");
    out
}

pub fn objective_panel(objective: Objective) -> String {
    format!(
        "\n=== YOUR SECRET MISSION ===\n*** MISSION: {} ***\n   Goal: {}\n===========================\n",
        objective.title(),
        objective.goal()
    )
}

pub fn menu() -> &'static str {
    "\n=== MAIN MENU ===\n1. Attack a territory\n2. Check victory\n0. Quit\n=================\n"
}

pub fn battle_report(outcome: &BattleOutcome) -> String {
    let a = &outcome.attacker;
    let d = &outcome.defender;
    let (attacker_dice, defender_dice) = outcome.dice_available();

    let mut out = String::new();
    let _ = writeln!(out, "\n*** BATTLE: {} vs {} ***", a.name, d.name);
    let _ = writeln!(out, "Attacking army: {} ({} troops)", a.faction, a.troops);
    let _ = writeln!(out, "Defending army: {} ({} troops)", d.faction, d.troops);
    let _ = writeln!(out, "\n*** Rolling dice... ***");
    let _ = writeln!(out, "Attacking troops: {} | Defending troops: {}", attacker_dice, defender_dice);
    let _ = writeln!(out, "{}", RULE);

    for (i, duel) in outcome.duels.iter().enumerate() {
        let winner = match duel.winner {
            Side::Attacker => "ATTACKER WINS! (+1)",
            Side::Defender => "DEFENDER WINS! (+1)",
        };
        let _ = writeln!(
            out,
            "Duel {}: attacker rolls {} | defender rolls {} -> {}",
            i + 1,
            duel.attacker_roll,
            duel.defender_roll,
            winner
        );
    }
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\n*** BATTLE RESULT: ***");
    let _ = writeln!(out, "Attacker wins: {}", outcome.attacker_wins);
    let _ = writeln!(out, "Defender wins: {}", outcome.defender_wins);
    let headline = match outcome.verdict() {
        Verdict::AttackerAhead => "ATTACKER PREVAILED!",
        Verdict::DefenderAhead => "DEFENDER PREVAILED!",
        Verdict::Draw => "DRAW!",
    };
    let _ = writeln!(out, "*** RESULT: {} ***", headline);

    if outcome.conquered {
        let _ = writeln!(out, "\n*** TERRITORY CONQUERED! ***");
        let _ = writeln!(out, "{} now belongs to the {} army!", d.name, a.faction);
    } else {
        let _ = writeln!(out, "\n*** Territory successfully defended! ***");
    }

    let destination_owner = if outcome.conquered { a.faction } else { d.faction };
    let _ = writeln!(out, "\nFinal state:");
    let _ = writeln!(out, "{}: {} troops ({})", a.name, outcome.origin_troops, a.faction);
    let _ = writeln!(out, "{}: {} troops ({})", d.name, outcome.destination_troops, destination_owner);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use war_engine::battle::{resolve_attack, ValidatedAttack};
    use war_engine::random::ScriptedRandom;
    use war_engine::types::*;

    #[test]
    fn test_map_table_lists_every_territory() {
        let map = WorldMap::from_territories(vec![
            Territory::new("Alaska", Faction::Blue, 3),
            Territory::new("Japan", Faction::Pink, 1),
        ]);
        let table = map_table(&map);
        assert!(table.contains("1   | Alaska"));
        assert!(table.contains("2   | Japan"));
        assert!(table.contains("Pink"));
    }

    #[test]
    fn test_objective_panel() {
        let panel = objective_panel(Objective::EliminateFaction(Faction::Red));
        assert!(panel.contains("Destroy the Red army"));
    }

    #[test]
    fn test_battle_report_conquest() {
        let mut map = WorldMap::from_territories(vec![
            Territory::new("Brazil", Faction::Blue, 5),
            Territory::new("Argentina", Faction::Red, 2),
        ]);
        let attack = ValidatedAttack::new(&map, Faction::Blue, 0, 1).unwrap();
        let mut dice = ScriptedRandom::duels(&[(6, 1), (5, 2)]);
        let outcome = resolve_attack(&mut map, attack, &mut dice);
        let report = battle_report(&outcome);
        assert!(report.contains("Duel 1: attacker rolls 6 | defender rolls 1 -> ATTACKER WINS!"));
        assert!(report.contains("Attacking troops: 4 | Defending troops: 2"));
        assert!(report.contains("TERRITORY CONQUERED"));
        assert!(report.contains("Argentina: 2 troops (Blue)"));
        assert!(report.contains("Brazil: 4 troops (Blue)"));
    }
}
