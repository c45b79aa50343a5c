//! The four menu actions plus owner registration.
//!
//! Every action works on an explicit [`Clinic`] and [`Console`]; nothing is
//! global. Recoverable input problems are handled here; only closed input,
//! exhausted retries and I/O failures reach the caller.

use std::io::{BufRead, Write};

use clinic_core::{normalize_name, Clinic, Clock, NewPet, OwnerId, PetId};
use tracing::info;

use crate::console::{parse_integer, Console};
use crate::error::{ActionResult, PromptError, PromptResult};

/// Width of the divider printed after each pet in the listing.
pub const DIVIDER_WIDTH: usize = 40;

/// Keywords accepted at the owner selection prompt to register a new owner.
const NEW_OWNER_KEYWORDS: [&str; 2] = ["new", "nuevo"];

/// Prompt for an owner and return the existing or newly created record.
///
/// Returns `None` when the entered name is blank.
pub fn register_owner<R: BufRead, W: Write>(
    clinic: &mut Clinic,
    console: &mut Console<R, W>,
) -> ActionResult<Option<OwnerId>> {
    let name = normalize_name(&console.ask("Enter the owner's name: ")?);
    if name.is_empty() {
        console.say("Owner name cannot be empty.")?;
        return Ok(None);
    }

    if let Some(id) = clinic.find_owner(&name) {
        console.say(format!("Owner '{}' is already registered.", name))?;
        return Ok(Some(id));
    }

    if let Some(similar) = clinic.similar_owner(&name) {
        console.say(format!(
            "Note: a similar owner is already registered: '{}'.",
            similar.name
        ))?;
    }

    let registration = clinic.try_register_owner(&name, || {
        let phone = console.ask("Enter the owner's phone: ")?;
        let address = console.ask("Enter the owner's address: ")?;
        Ok::<_, PromptError>((phone, address))
    })?;

    console.say(format!("Owner '{}' registered successfully.", name))?;
    Ok(Some(registration.id()))
}

/// Register a pet, picking an existing owner or creating one.
pub fn register_pet<R: BufRead, W: Write>(
    clinic: &mut Clinic,
    console: &mut Console<R, W>,
) -> ActionResult<Option<PetId>> {
    console.say("\n--- Register New Pet ---")?;

    let owner = if clinic.owner_count() == 0 {
        console.say("No owners registered. Please register an owner for the pet first.")?;
        register_owner(clinic, console)?
    } else {
        choose_owner(clinic, console)?
    };

    let Some(owner) = owner else {
        console.say("Could not assign an owner to the pet. Registration cancelled.")?;
        return Ok(None);
    };

    let name = console.ask("Pet name: ")?;
    let species = console.ask("Pet species: ")?;
    let breed = console.ask("Pet breed: ")?;
    let age = console.ask_integer(
        "Pet age (years): ",
        "Please enter a valid age (whole number).",
    )?;

    let id = clinic.add_pet(
        NewPet {
            name,
            species,
            breed,
            age,
        },
        owner,
    )?;

    if let (Some(pet), Some(owner)) = (clinic.pet(id), clinic.pet_owner(id)) {
        console.say(format!(
            "Pet '{}' registered successfully for {}.",
            pet.name, owner.name
        ))?;
    }
    Ok(Some(id))
}

/// Offer the owner list; bad input falls back to registering a new owner.
fn choose_owner<R: BufRead, W: Write>(
    clinic: &mut Clinic,
    console: &mut Console<R, W>,
) -> ActionResult<Option<OwnerId>> {
    console.say("Registered owners:")?;
    for (id, owner) in clinic.owners() {
        console.say(format!("  {}. {}", id.index() + 1, owner.name))?;
    }

    let answer = console
        .ask("Select the number of an existing owner or type 'new' to register one: ")?
        .trim()
        .to_lowercase();

    if NEW_OWNER_KEYWORDS.contains(&answer.as_str()) {
        return register_owner(clinic, console);
    }

    match parse_integer(&answer) {
        Some(n) => match usize::try_from(n).ok().and_then(|p| clinic.owner_at(p)) {
            Some(id) => Ok(Some(id)),
            None => {
                info!(selection = n, "owner selection out of range, registering new owner");
                console.say("Invalid option. A new owner will be registered.")?;
                register_owner(clinic, console)
            }
        },
        None => {
            info!("owner selection not a number, registering new owner");
            console.say("Invalid input. A new owner will be registered.")?;
            register_owner(clinic, console)
        }
    }
}

/// Print the numbered pet list and ask until a valid position is entered.
fn select_pet<R: BufRead, W: Write>(
    clinic: &Clinic,
    console: &mut Console<R, W>,
    prompt: &str,
) -> PromptResult<PetId> {
    console.say("Registered pets:")?;
    for (id, pet) in clinic.pets() {
        let owner = clinic.pet_owner(id).map(|o| o.name.as_str()).unwrap_or("?");
        console.say(format!("  {}. {} (Owner: {})", id.index() + 1, pet.name, owner))?;
    }

    console.ask_until(prompt, |answer| match parse_integer(answer) {
        None => Err("Invalid input. Please enter a number.".to_string()),
        Some(n) => usize::try_from(n)
            .ok()
            .and_then(|p| clinic.pet_at(p))
            .ok_or_else(|| "Invalid pet number. Please try again.".to_string()),
    })
}

/// Record a visit for a chosen pet, dated by `clock`.
pub fn register_visit<R: BufRead, W: Write>(
    clinic: &mut Clinic,
    console: &mut Console<R, W>,
    clock: &dyn Clock,
) -> ActionResult<Option<PetId>> {
    console.say("\n--- Register Veterinary Visit ---")?;
    if clinic.pet_count() == 0 {
        console.say("No pets registered to add a visit to.")?;
        return Ok(None);
    }

    let pet = select_pet(clinic, console, "Select the number of the pet for the visit: ")?;
    let date = clock.today();
    let reason = console.ask("Visit reason: ")?;
    let diagnosis = console.ask("Visit diagnosis: ")?;

    clinic.record_visit(pet, date, reason, diagnosis)?;
    if let Some(record) = clinic.pet(pet) {
        console.say(format!("Visit recorded for '{}'.", record.name))?;
    }
    Ok(Some(pet))
}

/// Print every pet with its owner, in registration order.
pub fn list_pets<R: BufRead, W: Write>(
    clinic: &Clinic,
    console: &mut Console<R, W>,
) -> ActionResult<()> {
    console.say("\n--- All Registered Pets ---")?;
    if clinic.pet_count() == 0 {
        console.say("No pets registered yet.")?;
        return Ok(());
    }

    let divider = "-".repeat(DIVIDER_WIDTH);
    for (id, pet) in clinic.pets() {
        console.say(pet.to_string())?;
        if let Some(owner) = clinic.pet_owner(id) {
            console.say(format!("  {}", owner))?;
        }
        console.say(&divider)?;
    }
    Ok(())
}

/// Print the visit history of a chosen pet.
pub fn show_history<R: BufRead, W: Write>(
    clinic: &Clinic,
    console: &mut Console<R, W>,
) -> ActionResult<()> {
    console.say("\n--- Pet Visit History ---")?;
    if clinic.pet_count() == 0 {
        console.say("No pets registered to view a history for.")?;
        return Ok(());
    }

    let id = select_pet(clinic, console, "Select the number of the pet to view its history: ")?;
    let Some(pet) = clinic.pet(id) else {
        return Ok(());
    };

    console.say(format!("\n--- Visit History for {} ---", pet.name))?;
    if pet.history().is_empty() {
        console.say(format!("'{}' has no visits registered yet.", pet.name))?;
        return Ok(());
    }

    for (i, visit) in pet.history().iter().enumerate() {
        console.say(format!("\nVisit #{}:", i + 1))?;
        console.say(visit.to_string())?;
        console.say("---")?;
    }
    Ok(())
}
