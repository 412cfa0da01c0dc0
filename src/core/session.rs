use crate::core::encoding::build_request;
use crate::models::{
    FormField, HouseForm, ModelChoice, PredictionOutcome, PredictionRequest,
};
use crate::services::{PredictorClient, PredictorError};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Errors surfaced by a prediction submission
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("A prediction is already in flight")]
    Busy,

    #[error(transparent)]
    Predictor(#[from] PredictorError),
}

#[derive(Debug)]
struct SessionState {
    form: HouseForm,
    outcome: Option<PredictionOutcome>,
    busy: bool,
}

/// Prediction session
///
/// Owns the form state and the two display slots (outcome and busy flag),
/// and orchestrates a submission: snapshot the form, build the payload,
/// call the selected endpoint, normalize the response into an outcome.
///
/// Clones share state, so a display layer can read the slots while a
/// submission is in flight. Only one submission may be in flight at a time;
/// a second `predict` while busy is rejected. The busy flag is cleared on
/// every exit path.
#[derive(Clone)]
pub struct PredictionSession {
    client: PredictorClient,
    state: Arc<RwLock<SessionState>>,
}

impl PredictionSession {
    /// Create a session with the default sample form values
    pub fn new(client: PredictorClient) -> Self {
        Self::with_form(client, HouseForm::default())
    }

    /// Create a session with explicit initial form values
    pub fn with_form(client: PredictorClient, form: HouseForm) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SessionState {
                form,
                outcome: None,
                busy: false,
            })),
        }
    }

    /// Replace one form field, leaving all others unchanged
    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.lock_mut().form.set(field, value);
    }

    /// Snapshot of the current form state
    pub fn form(&self) -> HouseForm {
        self.lock().form.clone()
    }

    /// The outcome of the last completed submission, if any
    pub fn outcome(&self) -> Option<PredictionOutcome> {
        self.lock().outcome.clone()
    }

    /// Whether a submission is currently in flight
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// Submit the current form to the selected model endpoint
    ///
    /// Clears the previous outcome before dispatching. On success the new
    /// outcome is stored in the display slot and returned; on failure the
    /// slot stays empty and the error is returned.
    pub async fn predict(&self, model: ModelChoice) -> Result<PredictionOutcome, PredictError> {
        let request = {
            let mut state = self.lock_mut();
            if state.busy {
                return Err(PredictError::Busy);
            }
            state.busy = true;
            state.outcome = None;
            build_request(&state.form)
        };

        tracing::debug!("Submitting {} prediction", model.label());

        let result = self.dispatch(model, &request).await;

        let mut state = self.lock_mut();
        state.busy = false;
        match result {
            Ok(outcome) => {
                state.outcome = Some(outcome.clone());
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("Prediction failed: {}", e);
                Err(PredictError::Predictor(e))
            }
        }
    }

    async fn dispatch(
        &self,
        model: ModelChoice,
        request: &PredictionRequest,
    ) -> Result<PredictionOutcome, PredictorError> {
        match model {
            ModelChoice::Lightgbm | ModelChoice::Xgboost => {
                let response = self.client.predict_value(model, request).await?;
                Ok(PredictionOutcome::Single {
                    value: response.predicted_median_house_value,
                    model: model.label(),
                })
            }
            ModelChoice::Ensemble => {
                let response = self.client.predict_ensemble(request).await?;
                Ok(PredictionOutcome::Ensemble {
                    lightgbm: response.lightgbm_prediction,
                    xgboost: response.xgboost_prediction,
                    mean: response.mean_prediction,
                    model: model.label(),
                })
            }
        }
    }

    fn lock(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().expect("session state lock poisoned")
    }

    fn lock_mut(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().expect("session state lock poisoned")
    }
}
