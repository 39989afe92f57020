use deals_core::{BrandDealFlow, BrandDealStep};
use deals_domain::{
    BrandDealForm, BrandDealPatch, CollaborationMode, GuestsAllowed, OfflineCollaborationType,
    Platform, INDUSTRIES,
};

use super::{
    choose_from, choose_optional, choose_required, display_date, display_option, prompt_amount,
    prompt_count, prompt_date, prompt_lines, summary_line, InteractiveFlow,
};
use crate::cli::prompter::FieldPrompter;
use crate::errors::CliError;

const MODES: [CollaborationMode; 2] = [CollaborationMode::Online, CollaborationMode::Offline];

impl InteractiveFlow for BrandDealFlow {
    const HEADING: &'static str = "Create Brand Deal";

    fn prompt_step(
        step: BrandDealStep,
        form: &BrandDealForm,
        prompter: &mut dyn FieldPrompter,
    ) -> Result<BrandDealPatch, CliError> {
        match step {
            BrandDealStep::GeneralInfo => general_info(form, prompter),
            BrandDealStep::Collaboration => collaboration(form, prompter),
            BrandDealStep::Requirements => requirements(form, prompter),
            BrandDealStep::BriefDetails => brief_details(form, prompter),
            BrandDealStep::GuestInfo => guest_info(form, prompter),
            BrandDealStep::Review => Ok(BrandDealPatch::default()),
        }
    }

    fn review_lines(form: &BrandDealForm) -> Vec<String> {
        let mut lines = vec![
            summary_line("Brand deal name", &form.title),
            summary_line("Industry", &form.industry),
            summary_line("Promotion type", &form.promotion_type),
            summary_line("Platform", display_option(form.platform)),
            summary_line("Collaboration", form.collaboration_type),
        ];
        if form.is_offline() {
            lines.push(summary_line(
                "Offline type",
                display_option(form.offline_collaboration_type),
            ));
        }
        lines.extend([
            summary_line("Deal value", &form.deal_value),
            summary_line("Price", display_option(form.price)),
            summary_line("Address", &form.address),
            summary_line("Apply by", display_date(form.deadline_to_apply)),
            summary_line("Post by", display_date(form.post_deadline)),
            summary_line("Followers required", form.followers_required),
            summary_line("Creators needed", form.creators_needed),
            summary_line("Booking link", form.booking_link.as_deref().unwrap_or_default()),
            summary_line("Brief", &form.brief),
            summary_line("Special instructions", &form.special_instructions),
            summary_line("Hashtags", &form.hashtags),
            summary_line("Mentions", &form.accounts_to_mention),
            summary_line("Dos and don'ts", form.dos_and_donts.replace('\n', "; ")),
            summary_line("Guests allowed", display_option(form.guests_allowed)),
            summary_line("Guest instructions", &form.guest_instructions),
            summary_line("Images", form.images.len()),
        ]);
        lines
    }
}

fn general_info(
    form: &BrandDealForm,
    prompter: &mut dyn FieldPrompter,
) -> Result<BrandDealPatch, CliError> {
    let title = prompter.text("Brand deal name", &form.title)?;
    let industry = choose_from(prompter, "Industry", INDUSTRIES, &form.industry)?;
    let promotion_type = prompter.text("Promotion type", &form.promotion_type)?;
    Ok(BrandDealPatch {
        title: Some(title),
        industry: Some(industry),
        promotion_type: Some(promotion_type),
        ..BrandDealPatch::default()
    })
}

fn collaboration(
    form: &BrandDealForm,
    prompter: &mut dyn FieldPrompter,
) -> Result<BrandDealPatch, CliError> {
    let platform = choose_optional(prompter, "Platform", &Platform::ALL, form.platform)?;
    let mode = choose_required(prompter, "Collaboration type", &MODES, form.collaboration_type)?;
    let offline_kind = match mode {
        CollaborationMode::Offline => choose_optional(
            prompter,
            "Offline collaboration type",
            &OfflineCollaborationType::ALL,
            form.offline_collaboration_type,
        )?,
        CollaborationMode::Online => form.offline_collaboration_type,
    };
    let deal_value = prompter.text("Deal value", &form.deal_value)?;
    let price = prompt_amount(prompter, "Price", form.price)?;
    Ok(BrandDealPatch {
        platform: Some(platform),
        collaboration_type: Some(mode),
        offline_collaboration_type: Some(offline_kind),
        deal_value: Some(deal_value),
        price: Some(price),
        ..BrandDealPatch::default()
    })
}

fn requirements(
    form: &BrandDealForm,
    prompter: &mut dyn FieldPrompter,
) -> Result<BrandDealPatch, CliError> {
    let address = prompter.text("Address", &form.address)?;
    let deadline = prompt_date(prompter, "Application deadline", form.deadline_to_apply)?;
    let post_deadline = prompt_date(prompter, "Posting deadline", form.post_deadline)?;
    let followers = prompt_count(prompter, "Followers required", form.followers_required)?;
    let creators = prompt_count(prompter, "Creators needed", form.creators_needed)?;
    let booking_link = prompter.text(
        "Booking link",
        form.booking_link.as_deref().unwrap_or_default(),
    )?;
    let booking_link = Some(booking_link.trim().to_string()).filter(|link| !link.is_empty());
    Ok(BrandDealPatch {
        address: Some(address),
        deadline_to_apply: Some(deadline),
        post_deadline: Some(post_deadline),
        followers_required: Some(followers),
        creators_needed: Some(creators),
        booking_link: Some(booking_link),
        ..BrandDealPatch::default()
    })
}

fn brief_details(
    form: &BrandDealForm,
    prompter: &mut dyn FieldPrompter,
) -> Result<BrandDealPatch, CliError> {
    let brief = prompter.text("Brief", &form.brief)?;
    let special = prompter.text("Special instructions", &form.special_instructions)?;
    let hashtags = prompter.text("Hashtags", &form.hashtags)?;
    let mentions = prompter.text("Accounts to mention", &form.accounts_to_mention)?;
    let dos_and_donts = prompt_lines(prompter, "Dos and don'ts", &form.dos_and_donts)?;
    Ok(BrandDealPatch {
        brief: Some(brief),
        special_instructions: Some(special),
        hashtags: Some(hashtags),
        accounts_to_mention: Some(mentions),
        dos_and_donts: Some(dos_and_donts),
        ..BrandDealPatch::default()
    })
}

fn guest_info(
    form: &BrandDealForm,
    prompter: &mut dyn FieldPrompter,
) -> Result<BrandDealPatch, CliError> {
    let guests = choose_optional(
        prompter,
        "Guests allowed",
        &GuestsAllowed::ALL,
        form.guests_allowed,
    )?;
    let instructions = prompter.text("Guest instructions", &form.guest_instructions)?;
    Ok(BrandDealPatch {
        guests_allowed: Some(guests),
        guest_instructions: Some(instructions),
        ..BrandDealPatch::default()
    })
}
