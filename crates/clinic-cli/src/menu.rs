//! Main menu state machine.

use std::io::{BufRead, Write};

use clinic_core::{Clinic, Clock};
use tracing::{debug, info};

use crate::actions;
use crate::config::ClinicConfig;
use crate::console::Console;
use crate::error::{ActionError, ActionResult, PromptError};

/// A recognized menu option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterPet,
    RegisterVisit,
    ListPets,
    ShowHistory,
    Exit,
}

impl MenuChoice {
    /// Map a menu answer ("1".."5") to a choice.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::RegisterPet),
            "2" => Some(MenuChoice::RegisterVisit),
            "3" => Some(MenuChoice::ListPets),
            "4" => Some(MenuChoice::ShowHistory),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    ShowingMenu,
    Dispatching(MenuChoice),
    Terminated,
}

/// One interactive session: the clinic records plus the console driving them.
pub struct ClinicApp<R, W, C> {
    clinic: Clinic,
    console: Console<R, W>,
    clock: C,
    clinic_name: String,
}

impl<R: BufRead, W: Write, C: Clock> ClinicApp<R, W, C> {
    /// Start an empty session.
    pub fn new(config: &ClinicConfig, input: R, output: W, clock: C) -> Self {
        Self {
            clinic: Clinic::new(),
            console: Console::new(input, output, config.prompt.max_attempts),
            clock,
            clinic_name: config.clinic_name.clone(),
        }
    }

    pub fn clinic(&self) -> &Clinic {
        &self.clinic
    }

    /// End the session, handing back the records and the console writer.
    pub fn into_parts(self) -> (Clinic, W) {
        (self.clinic, self.console.into_output())
    }

    /// Drive the menu until the user exits or input ends.
    pub fn run(&mut self) -> ActionResult<()> {
        let mut state = MenuState::ShowingMenu;
        while state != MenuState::Terminated {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Perform one transition.
    pub fn step(&mut self, state: MenuState) -> ActionResult<MenuState> {
        match state {
            MenuState::ShowingMenu => self.show_menu(),
            MenuState::Dispatching(choice) => self.dispatch(choice),
            MenuState::Terminated => Ok(MenuState::Terminated),
        }
    }

    fn show_menu(&mut self) -> ActionResult<MenuState> {
        self.console
            .say(format!("\n--- Main Menu: {} Clinic ---", self.clinic_name))?;
        self.console.say("1. Register pet")?;
        self.console.say("2. Register visit")?;
        self.console.say("3. List pets")?;
        self.console.say("4. View a pet's visit history")?;
        self.console.say("5. Exit")?;
        self.console.say("-".repeat(42))?;

        let answer = match self.console.ask("Select an option: ") {
            Ok(answer) => answer,
            Err(PromptError::InputClosed) => return self.farewell(),
            Err(e) => return Err(e.into()),
        };

        match MenuChoice::parse(&answer) {
            Some(choice) => Ok(MenuState::Dispatching(choice)),
            None => {
                info!(answer = %answer.trim(), "invalid menu option");
                self.console.say("Invalid option. Please try again.")?;
                Ok(MenuState::ShowingMenu)
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ActionResult<MenuState> {
        debug!(?choice, "dispatching");
        let result = match choice {
            MenuChoice::RegisterPet => {
                actions::register_pet(&mut self.clinic, &mut self.console).map(drop)
            }
            MenuChoice::RegisterVisit => {
                actions::register_visit(&mut self.clinic, &mut self.console, &self.clock)
                    .map(drop)
            }
            MenuChoice::ListPets => actions::list_pets(&self.clinic, &mut self.console),
            MenuChoice::ShowHistory => actions::show_history(&self.clinic, &mut self.console),
            MenuChoice::Exit => return self.farewell(),
        };

        match result {
            Ok(()) => Ok(MenuState::ShowingMenu),
            Err(ActionError::Prompt(PromptError::AttemptsExhausted { attempts })) => {
                info!(?choice, attempts, "action cancelled");
                self.console
                    .say("Too many invalid attempts. Operation cancelled.")?;
                Ok(MenuState::ShowingMenu)
            }
            Err(ActionError::Prompt(PromptError::InputClosed)) => self.farewell(),
            Err(e) => Err(e),
        }
    }

    fn farewell(&mut self) -> ActionResult<MenuState> {
        self.console.say(format!(
            "Thank you for using the {} application! See you soon!",
            self.clinic_name
        ))?;
        Ok(MenuState::Terminated)
    }
}
