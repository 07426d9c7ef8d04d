//! Named QA scenarios: native rule-engine checks and WebDriver flows.
use anyhow::{Context, Result, bail, ensure};
use async_trait::async_trait;
use confreg_form::{
    ActivityCatalog, ActivitySelection, JobRole, PaymentMethod, Registration, ShirtColor,
    ShirtDesign, check_email,
};
use std::collections::BTreeSet;
use thirtyfour::prelude::*;

pub struct LogicScenario {
    pub name: &'static str,
    pub run: fn() -> Result<()>,
}

#[must_use]
pub fn logic_scenarios() -> Vec<LogicScenario> {
    vec![
        LogicScenario {
            name: "validation-happy-path",
            run: validation_happy_path,
        },
        LogicScenario {
            name: "validation-rejects-bad-fields",
            run: validation_rejects_bad_fields,
        },
        LogicScenario {
            name: "conflict-propagation",
            run: conflict_propagation,
        },
        LogicScenario {
            name: "incremental-total",
            run: incremental_total,
        },
        LogicScenario {
            name: "registration-json-round-trip",
            run: registration_json_round_trip,
        },
        LogicScenario {
            name: "catalog-integrity",
            run: catalog_integrity,
        },
    ]
}

fn complete_registration(catalog: &ActivityCatalog) -> Result<Registration> {
    let mut reg = Registration::default();
    reg.registrant.name = "Margaret Hamilton".to_string();
    reg.registrant.email = "margaret@example.com".to_string();
    reg.registrant.job_role = JobRole::Engineer;
    reg.shirt.set_design(ShirtDesign::Heart);
    ensure!(reg.shirt.set_color(ShirtColor::Tomato), "colour fits design");
    ensure!(
        reg.activities.set_checked(catalog, "main-conference", true),
        "main conference toggles on"
    );
    reg.payment.method = PaymentMethod::CreditCard;
    reg.payment.card.number = "4111111111111111".to_string();
    reg.payment.card.zip = "97205".to_string();
    reg.payment.card.cvv = "123".to_string();
    Ok(reg)
}

fn validation_happy_path() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    let reg = complete_registration(&catalog)?;
    let report = reg.validate();
    ensure!(report.is_ok(), "expected no issues, got {:?}", report.issues());
    Ok(())
}

fn validation_rejects_bad_fields() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    let mut reg = complete_registration(&catalog)?;
    reg.registrant.name = "  ".to_string();
    reg.registrant.email = "at@at@example.com".to_string();
    reg.payment.card.number = "123".to_string();
    let report = reg.validate();
    ensure!(!report.is_ok(), "broken fields must fail validation");
    ensure!(report.issues().len() == 3, "one issue per broken field");
    ensure!(check_email("a@b.com").is_ok(), "sanity: plain address passes");
    Ok(())
}

fn conflict_propagation() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    let mut sel = ActivitySelection::new();
    ensure!(sel.set_checked(&catalog, "async-rust", true));
    ensure!(sel.is_blocked(&catalog, "api-design"), "peer is blocked");
    ensure!(!sel.is_checked("api-design"), "peer keeps its checked state");
    ensure!(
        !sel.set_checked(&catalog, "api-design", true),
        "blocked activities cannot be checked"
    );
    ensure!(sel.set_checked(&catalog, "async-rust", false));
    ensure!(!sel.is_blocked(&catalog, "api-design"), "peer re-enabled");
    Ok(())
}

fn incremental_total() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    let mut sel = ActivitySelection::new();
    ensure!(sel.set_checked(&catalog, "main-conference", true));
    ensure!(sel.set_checked(&catalog, "databases", true));
    ensure!(sel.set_checked(&catalog, "main-conference", false));
    ensure!(
        sel.total_dollars() == 100,
        "expected $100 after uncheck, got ${}",
        sel.total_dollars()
    );
    Ok(())
}

fn registration_json_round_trip() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    let reg = complete_registration(&catalog)?;
    let encoded = serde_json::to_string(&reg).context("encoding registration")?;
    let decoded: Registration = serde_json::from_str(&encoded).context("decoding registration")?;
    ensure!(decoded == reg, "round trip must preserve the registration");
    ensure!(decoded.validate().is_ok(), "decoded registration still valid");
    Ok(())
}

fn catalog_integrity() -> Result<()> {
    let catalog = ActivityCatalog::load_from_static();
    ensure!(!catalog.is_empty(), "embedded catalog must not be empty");

    let mut seen = BTreeSet::new();
    for activity in catalog.iter() {
        ensure!(seen.insert(&activity.id), "duplicate id {}", activity.id);
        ensure!(!activity.name.trim().is_empty(), "activity names are set");
        ensure!(
            activity.cost_cents % 100 == 0,
            "{} has a fractional-dollar cost",
            activity.id
        );
        if let Some(slot) = &activity.slot {
            ensure!(!slot.day.trim().is_empty(), "slot day is set");
            ensure!(!slot.time.trim().is_empty(), "slot time is set");
        }
    }
    Ok(())
}

/// A browser-automation flow run against a served confreg-web build.
#[async_trait]
pub trait BrowserScenario: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self, driver: &WebDriver) -> Result<()>;
}

#[must_use]
pub fn browser_scenarios() -> Vec<Box<dyn BrowserScenario>> {
    vec![
        Box::new(HappyPathFlow),
        Box::new(ConflictDisableFlow),
        Box::new(InvalidSubmitFlow),
    ]
}

struct HappyPathFlow;

#[async_trait]
impl BrowserScenario for HappyPathFlow {
    fn name(&self) -> &'static str {
        "browser-happy-path"
    }

    async fn run(&self, driver: &WebDriver) -> Result<()> {
        driver.find(By::Id("name")).await?.send_keys("Ada Lovelace").await?;
        driver
            .find(By::Id("email"))
            .await?
            .send_keys("ada@example.com")
            .await?;
        driver.find(By::Id("main-conference")).await?.click().await?;
        driver
            .find(By::Id("cc-num"))
            .await?
            .send_keys("4111111111111111")
            .await?;
        driver.find(By::Id("zip")).await?.send_keys("97205").await?;
        driver.find(By::Id("cvv")).await?.send_keys("123").await?;
        driver.find(By::Id("register-btn")).await?.click().await?;

        let confirmation = driver
            .query(By::Css("[data-testid='confirmation']"))
            .first()
            .await
            .context("confirmation panel after a valid submit")?;
        ensure!(confirmation.is_displayed().await?, "confirmation visible");
        Ok(())
    }
}

struct ConflictDisableFlow;

#[async_trait]
impl BrowserScenario for ConflictDisableFlow {
    fn name(&self) -> &'static str {
        "browser-conflict-disable"
    }

    async fn run(&self, driver: &WebDriver) -> Result<()> {
        driver.find(By::Id("async-rust")).await?.click().await?;
        let peer = driver.find(By::Id("api-design")).await?;
        ensure!(!peer.is_enabled().await?, "conflicting workshop disabled");
        ensure!(!peer.is_selected().await?, "peer stays unchecked");

        driver.find(By::Id("async-rust")).await?.click().await?;
        let peer = driver.find(By::Id("api-design")).await?;
        ensure!(peer.is_enabled().await?, "peer re-enabled after uncheck");
        Ok(())
    }
}

struct InvalidSubmitFlow;

#[async_trait]
impl BrowserScenario for InvalidSubmitFlow {
    fn name(&self) -> &'static str {
        "browser-invalid-submit"
    }

    async fn run(&self, driver: &WebDriver) -> Result<()> {
        driver.find(By::Id("register-btn")).await?.click().await?;
        let flagged = driver.query(By::Css(".not-valid")).all_from_selector().await?;
        ensure!(
            flagged.len() >= 3,
            "name, email, and activities should be flagged, got {}",
            flagged.len()
        );
        if driver.query(By::Css("[data-testid='confirmation']")).exists().await? {
            bail!("invalid submit must not reach the confirmation panel");
        }
        Ok(())
    }
}
