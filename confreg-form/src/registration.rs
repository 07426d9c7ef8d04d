//! The registration aggregate
use crate::payment::PaymentInfo;
use crate::registrant::RegistrantInfo;
use crate::selection::ActivitySelection;
use crate::shirt::ShirtSelection;
use crate::validate::{
    FieldError, ValidationReport, check_card_number, check_card_zip, check_cvv, check_email,
    check_name,
};
use serde::{Deserialize, Serialize};

/// Everything the form collects over one page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Registration {
    pub registrant: RegistrantInfo,
    pub shirt: ShirtSelection,
    pub activities: ActivitySelection,
    pub payment: PaymentInfo,
}

impl Registration {
    /// Run every submission check in order: name, email, activities, and
    /// the card fields when the payment method collects them.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let card_evaluated = self.payment.method.requires_card();

        let mut checks = vec![
            check_name(&self.registrant.name),
            check_email(&self.registrant.email),
            if self.activities.has_selection() {
                Ok(())
            } else {
                Err(FieldError::NoActivities)
            },
        ];
        if card_evaluated {
            checks.push(check_card_number(&self.payment.card.number));
            checks.push(check_card_zip(&self.payment.card.zip));
            checks.push(check_cvv(&self.payment.card.cvv));
        }

        let issues = checks.into_iter().filter_map(Result::err).collect();
        ValidationReport::new(issues, card_evaluated)
    }
}
