// ═══════════════════════════════════════════════════════════════════════
// Interactive play — the menu loop around a Session.
// Generic over input/output so it can be driven by a script in tests.
// ═══════════════════════════════════════════════════════════════════════

use crate::render;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use war_engine::engine::{Action, ActionReport, Session};
use war_engine::random::RandomSource;

/// Read one trimmed line; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Run the menu until the player wins, quits, or input runs out.
pub fn run_interactive<R: RandomSource>(
    session: &mut Session<R>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let player = *session.player();
    writeln!(out, "=== WELCOME TO WAR ===")?;
    writeln!(out, "You command the {} army!", player.faction)?;
    writeln!(out, "Your secret mission has been drawn...\n")?;

    while !session.is_finished() {
        write!(out, "{}", render::map_table(session.map()))?;
        write!(out, "{}", render::objective_panel(player.objective))?;
        write!(out, "{}", render::menu())?;
        prompt(&mut out, "Choose an option: ")?;

        let Some(choice) = read_line(&mut input)? else {
            session.apply_action(Action::Quit)?;
            break;
        };

        match choice.parse::<i32>() {
            Ok(1) => attack_phase(session, &mut input, &mut out)?,
            Ok(2) => {
                if let ActionReport::VictoryCheck { met } =
                    session.apply_action(Action::CheckVictory)?
                {
                    if met {
                        writeln!(out, "\n*** CONGRATULATIONS! You completed your mission and won the game! ***")?;
                    } else {
                        writeln!(out, "\n*** You have not completed your mission yet. Keep trying! ***")?;
                    }
                }
            }
            Ok(0) => {
                session.apply_action(Action::Quit)?;
                writeln!(out, "\nThanks for playing! See you next time!")?;
            }
            _ => writeln!(out, "\nInvalid option! Try again.")?,
        }

        if !session.is_finished() {
            prompt(&mut out, "\nPress Enter to continue...")?;
            if read_line(&mut input)?.is_none() {
                session.apply_action(Action::Quit)?;
            }
        }
    }
    Ok(())
}

fn attack_phase<R: RandomSource>(
    session: &mut Session<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let count = session.map().len();
    writeln!(out, "\n=== ATTACK PHASE ===")?;

    prompt(out, &format!("Choose the origin territory (1-{}): ", count))?;
    let origin = read_line(input)?.unwrap_or_default();
    prompt(out, &format!("Choose the destination territory (1-{}): ", count))?;
    let destination = read_line(input)?.unwrap_or_default();

    let (Ok(origin), Ok(destination)) = (origin.parse::<usize>(), destination.parse::<usize>())
    else {
        writeln!(out, "*** Invalid territories! Try again. ***")?;
        return Ok(());
    };

    match session.apply_action(Action::Attack { origin, destination }) {
        Ok(ActionReport::Battle(outcome)) => write!(out, "{}", render::battle_report(&outcome))?,
        Ok(_) => {}
        Err(e) => writeln!(out, "*** {}. Try again. ***", e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use war_engine::map::WorldMap;
    use war_engine::random::ScriptedRandom;
    use war_engine::types::*;

    fn session(dice: &[(u8, u8)]) -> Session<ScriptedRandom> {
        let map = WorldMap::from_territories(vec![
            Territory::new("Brazil", Faction::Blue, 3),
            Territory::new("Argentina", Faction::Red, 1),
        ]);
        let player = Player {
            faction: Faction::Blue,
            objective: Objective::EliminateFaction(Faction::Red),
        };
        Session::from_parts(map, player, ScriptedRandom::duels(dice))
    }

    fn play(session: &mut Session<ScriptedRandom>, script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(session, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_attack_then_win() {
        let mut s = session(&[(6, 2)]);
        let output = play(&mut s, "1\n1\n2\n\n2\n");
        assert!(output.contains("TERRITORY CONQUERED"));
        assert!(output.contains("CONGRATULATIONS"));
        assert!(s.is_victory());
    }

    #[test]
    fn test_invalid_inputs_keep_looping() {
        let mut s = session(&[]);
        let output = play(&mut s, "7\n\n1\nx\n2\n\n1\n2\n1\n\n0\n");
        assert!(output.contains("Invalid option!"));
        assert!(output.contains("Invalid territories!"));
        assert!(output.contains("belongs to Red"));
        assert!(output.contains("Thanks for playing!"));
        assert!(!s.is_victory());
        assert!(s.is_finished());
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut s = session(&[]);
        play(&mut s, "");
        assert!(s.is_finished());
        assert!(!s.is_victory());
    }
}
