//! Wire format of the MBM inventory API

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use isoportal_api_types::ContainerRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// One isotank as the MBM API serialises it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IsotanqueDto {
    pub codigo: String,
    pub produto: Option<String>,
    pub cliente: Option<String>,
    pub tipo: Option<String>,
    pub proprietario_armador: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_inicio_status: Option<NaiveDateTime>,
    pub dias_no_status: Option<i64>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub previsao_liberacao: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_entrada: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_hora_descarregado_patio: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_hora_carregado_veiculo: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub previsao_chegada_terminal: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_hora_descarregado_terminal: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub data_saida: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub sla_limite: Option<NaiveDateTime>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub teste_periodico_vencimento: Option<NaiveDateTime>,
    pub reparo_acumulado_valor: Option<Decimal>,
    pub numero_booking: Option<String>,
    pub patio: Option<String>,
    pub bloco: Option<String>,
    pub fila: Option<String>,
    pub pilha: Option<String>,
    pub placa_veiculo: Option<String>,
    pub url_foto: Option<String>,
    pub urls_fotos: Option<Vec<String>>,
    pub url_laudo_vistoria: Option<String>,
    pub url_certificado_lavagem: Option<String>,
}

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse the timestamp shapes the upstream emits. Offsets are dropped and
/// the local wall-clock time kept.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => parse_timestamp(&text)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised timestamp '{}'", text))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl IsotanqueDto {
    /// Map onto the portal record.
    ///
    /// Older MBM builds send `diasNoStatus` without `dataInicioStatus`; the
    /// start is then reconstructed from `today` so the engine can recompute
    /// the day count like any other record. A count too large to turn back
    /// into a date leaves both fields empty.
    pub fn into_record(self, today: NaiveDate) -> ContainerRecord {
        let (status_started_at, days_in_status) = match self.data_inicio_status {
            Some(started) => (Some(started), self.dias_no_status),
            None => {
                let started = self.dias_no_status.and_then(|days| {
                    chrono::Duration::try_days(days)
                        .and_then(|delta| today.checked_sub_signed(delta))
                        .map(|date| date.and_time(NaiveTime::MIN))
                });
                (started, started.and(self.dias_no_status))
            }
        };

        ContainerRecord {
            code: self.codigo.trim().to_string(),
            product: non_blank(self.produto),
            client: self.cliente.unwrap_or_default(),
            kind: non_blank(self.tipo),
            owner_operator: non_blank(self.proprietario_armador),
            status: self.status.unwrap_or_default(),
            status_started_at,
            days_in_status,
            expected_release_at: self.previsao_liberacao.map(|ts| ts.date()),
            entered_yard_at: self.data_entrada,
            unloaded_at_yard_at: self.data_hora_descarregado_patio,
            loaded_on_vehicle_at: self.data_hora_carregado_veiculo,
            expected_terminal_arrival_at: self.previsao_chegada_terminal,
            unloaded_at_terminal_at: self.data_hora_descarregado_terminal,
            exited_at: self.data_saida,
            sla_deadline: self.sla_limite,
            periodic_test_due_at: self.teste_periodico_vencimento.map(|ts| ts.date()),
            accumulated_repair_value: self.reparo_acumulado_valor,
            booking_number: non_blank(self.numero_booking),
            yard: non_blank(self.patio),
            block: non_blank(self.bloco),
            row: non_blank(self.fila),
            stack: non_blank(self.pilha),
            vehicle_plate: non_blank(self.placa_veiculo),
            photo_url: non_blank(self.url_foto),
            photo_urls: self.urls_fotos.unwrap_or_default(),
            inspection_report_url: non_blank(self.url_laudo_vistoria),
            cleaning_certificate_url: non_blank(self.url_certificado_lavagem),
        }
    }
}
