// Command: light and stereo commands driven through a fixed-slot remote control.

use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::{PatternError, Result};

pub const DEFAULT_SLOTS: usize = 3;

/// Highest slot index `run_demo` programs, plus one.
pub const DEMO_SLOTS: usize = 3;

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
    fn undo(&self, out: &mut dyn Write) -> Result<()>;
}

/// Placeholder for an empty slot.
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "No command!")?;
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "No command!")?;
        Ok(())
    }
}

pub struct LightOnCommand;

impl Command for LightOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Light on!")?;
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        LightOffCommand.execute(out)
    }
}

pub struct LightOffCommand;

impl Command for LightOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Light off!")?;
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        LightOnCommand.execute(out)
    }
}

pub struct StereoOnCommand;

impl Command for StereoOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Stereo on!")?;
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        StereoOffCommand.execute(out)
    }
}

pub struct StereoOffCommand;

impl Command for StereoOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Stereo off!")?;
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        StereoOnCommand.execute(out)
    }
}

/// Runs a batch of commands as one. Undo walks the batch in the same order as execute.
pub struct MacroCommand {
    commands: Vec<Box<dyn Command>>,
}

impl MacroCommand {
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        Self { commands }
    }
}

impl Command for MacroCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        for command in &self.commands {
            command.execute(out)?;
        }
        Ok(())
    }

    fn undo(&self, out: &mut dyn Write) -> Result<()> {
        for command in &self.commands {
            command.undo(out)?;
        }
        Ok(())
    }
}

// ============================================================================
// Invoker
// ============================================================================

/// Remote with paired on/off buttons per slot and a single undo button.
///
/// A slot and the undo register may hold the same command, so commands are
/// shared through `Rc`.
pub struct RemoteControl {
    on_commands: Vec<Rc<dyn Command>>,
    off_commands: Vec<Rc<dyn Command>>,
    undo_command: Rc<dyn Command>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_SLOTS)
    }

    pub fn with_slots(slots: usize) -> Self {
        let no_command: Rc<dyn Command> = Rc::new(NoCommand);
        Self {
            on_commands: vec![Rc::clone(&no_command); slots],
            off_commands: vec![Rc::clone(&no_command); slots],
            undo_command: no_command,
        }
    }

    pub fn slots(&self) -> usize {
        self.on_commands.len()
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if slot < self.slots() {
            Ok(())
        } else {
            Err(PatternError::SlotOutOfRange {
                slot,
                slots: self.slots(),
            })
        }
    }

    pub fn set_command(
        &mut self,
        slot: usize,
        on_command: Rc<dyn Command>,
        off_command: Rc<dyn Command>,
    ) -> Result<()> {
        self.check_slot(slot)?;
        debug!(slot, "assigning commands to remote slot");
        self.on_commands[slot] = on_command;
        self.off_commands[slot] = off_command;
        Ok(())
    }

    pub fn press_button_on(&mut self, slot: usize, out: &mut dyn Write) -> Result<()> {
        self.check_slot(slot)?;
        let command = Rc::clone(&self.on_commands[slot]);
        command.execute(out)?;
        self.undo_command = command;
        Ok(())
    }

    pub fn press_button_off(&mut self, slot: usize, out: &mut dyn Write) -> Result<()> {
        self.check_slot(slot)?;
        let command = Rc::clone(&self.off_commands[slot]);
        command.execute(out)?;
        self.undo_command = command;
        Ok(())
    }

    pub fn press_button_undo(&self, out: &mut dyn Write) -> Result<()> {
        self.undo_command.undo(out)
    }
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_demo(out: &mut dyn Write, slots: usize) -> Result<()> {
    let mut remote_control = RemoteControl::with_slots(slots);

    remote_control.press_button_on(0, out)?;
    remote_control.press_button_off(0, out)?;

    remote_control.set_command(1, Rc::new(LightOnCommand), Rc::new(LightOffCommand))?;
    remote_control.press_button_on(1, out)?;
    remote_control.press_button_off(1, out)?;

    remote_control.set_command(
        2,
        Rc::new(MacroCommand::new(vec![
            Box::new(LightOnCommand),
            Box::new(StereoOnCommand),
        ])),
        Rc::new(MacroCommand::new(vec![
            Box::new(LightOffCommand),
            Box::new(StereoOffCommand),
        ])),
    )?;
    remote_control.press_button_on(2, out)?;
    remote_control.press_button_off(2, out)?;
    remote_control.press_button_undo(out)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut out: Vec<u8> = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_fresh_remote_has_no_commands() {
        let mut remote = RemoteControl::new();
        let text = output(|out| {
            remote.press_button_on(2, out)?;
            remote.press_button_off(1, out)?;
            remote.press_button_undo(out)
        });
        assert_eq!(text, "No command!\nNo command!\nNo command!\n");
    }

    #[test]
    fn test_undo_before_any_press() {
        let remote = RemoteControl::new();
        assert_eq!(output(|out| remote.press_button_undo(out)), "No command!\n");
    }

    #[test]
    fn test_undo_follows_last_button() {
        let mut remote = RemoteControl::new();
        remote
            .set_command(0, Rc::new(LightOnCommand), Rc::new(LightOffCommand))
            .unwrap();

        let text = output(|out| {
            remote.press_button_on(0, out)?;
            remote.press_button_undo(out)
        });
        assert_eq!(text, "Light on!\nLight off!\n");

        let text = output(|out| {
            remote.press_button_off(0, out)?;
            remote.press_button_undo(out)
        });
        assert_eq!(text, "Light off!\nLight on!\n");
    }

    #[test]
    fn test_macro_undo_keeps_order() {
        let command = MacroCommand::new(vec![
            Box::new(LightOffCommand),
            Box::new(StereoOffCommand),
        ]);
        assert_eq!(output(|out| command.undo(out)), "Light on!\nStereo on!\n");
    }

    #[test]
    fn test_empty_macro_prints_nothing() {
        let command = MacroCommand::new(Vec::new());
        assert_eq!(output(|out| command.execute(out)), "");
        assert_eq!(output(|out| command.undo(out)), "");
    }

    #[test]
    fn test_slot_out_of_range() {
        let mut remote = RemoteControl::with_slots(2);
        let mut out: Vec<u8> = Vec::new();

        let err = remote.press_button_on(2, &mut out).unwrap_err();
        assert!(matches!(err, PatternError::SlotOutOfRange { slot: 2, slots: 2 }));

        let err = remote
            .set_command(5, Rc::new(NoCommand), Rc::new(NoCommand))
            .unwrap_err();
        assert!(matches!(err, PatternError::SlotOutOfRange { slot: 5, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_demo_slot_requirement() {
        let mut out: Vec<u8> = Vec::new();
        assert!(run_demo(&mut out, DEMO_SLOTS).is_ok());

        let mut out: Vec<u8> = Vec::new();
        let err = run_demo(&mut out, DEMO_SLOTS - 1).unwrap_err();
        assert!(matches!(err, PatternError::SlotOutOfRange { slot, .. } if slot == DEMO_SLOTS - 1));
    }
}
