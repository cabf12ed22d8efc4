//! Demonstration inventory
//!
//! Every date is relative to the day the seed is built, so the dashboards
//! look the same whenever the portal is started in local mode.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use isoportal_api_types::status::{AWAITING_ESTIMATE, CLEANING, INSPECTION, OFF_HIRE, REPAIR};
use isoportal_api_types::ContainerRecord;
use rust_decimal::Decimal;

pub const DEN_HARTOGH: &str = "DEN HARTOGH";
pub const EMPRESA_ALPHA: &str = "Empresa Alpha";
pub const QUIMICA_BETA: &str = "Química Beta";

const WITH_INSPECTION_REPORT: [&str; 10] = [
    "DHDU1274480",
    "DHDL2272373",
    "DHDU2273512",
    "DHDL3399881",
    "DHDU4455667",
    "EXFU5567363",
    "EXFU6422402",
    "EXFU7711223",
    "SEDU2233445",
    "SEDU7788990",
];

const WITH_CLEANING_CERTIFICATE: [&str; 9] = [
    "DHDU1274480",
    "DHDL2272373",
    "DHDU2273512",
    "DHDL3399881",
    "DHDU4455667",
    "EXFU5567363",
    "EXFU6422402",
    "EXFU7711223",
    "SEDU2233445",
];

struct Seed {
    today: NaiveDate,
}

impl Seed {
    fn day(&self, offset: i64) -> NaiveDate {
        self.today + Duration::days(offset)
    }

    fn at(&self, offset_days: i64, hour: u32) -> NaiveDateTime {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN);
        self.day(offset_days).and_time(time)
    }

    fn midnight(&self, offset: i64) -> NaiveDateTime {
        self.day(offset).and_time(NaiveTime::MIN)
    }

    #[allow(clippy::too_many_arguments)]
    fn tank(
        &self,
        code: &str,
        product: &str,
        client: &str,
        status: &str,
        started: i64,
        release: Option<i64>,
        entered: i64,
    ) -> ContainerRecord {
        ContainerRecord {
            code: code.to_string(),
            product: Some(product.to_string()),
            client: client.to_string(),
            kind: Some("ISO 20'".to_string()),
            status: status.to_string(),
            status_started_at: Some(self.midnight(started)),
            expected_release_at: release.map(|offset| self.day(offset)),
            entered_yard_at: Some(self.midnight(entered)),
            ..Default::default()
        }
    }
}

/// Build the demonstration inventory as of `today`
pub fn inventory(today: NaiveDate) -> Vec<ContainerRecord> {
    let s = Seed { today };

    let mut records = vec![
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-5, 8)),
            photo_url: Some("https://placehold.co/400x200/0d6efd/white?text=Isotanque+DHDU1274480".into()),
            booking_number: Some("BK-2026-001".into()),
            yard: Some("Pátio 1".into()),
            block: Some("A".into()),
            row: Some("03".into()),
            stack: Some("1".into()),
            ..s.tank("DHDU1274480", "Etanol", DEN_HARTOGH, AWAITING_ESTIMATE, 0, Some(2), -5)
        },
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-3, 14)),
            loaded_on_vehicle_at: Some(s.at(-1, 9)),
            vehicle_plate: Some("QRT4E21".into()),
            exited_at: Some(s.midnight(1)),
            expected_terminal_arrival_at: Some(s.at(1, 16)),
            photo_url: Some("https://placehold.co/400x200/198754/white?text=Isotanque+DHDL2272373".into()),
            booking_number: Some("BK-2026-001".into()),
            ..s.tank("DHDL2272373", "Metanol", DEN_HARTOGH, CLEANING, 0, Some(5), -3)
        },
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-2, 7)),
            photo_url: Some("https://placehold.co/400x200/6f42c1/white?text=Isotanque+DHDU2273512".into()),
            ..s.tank("DHDU2273512", "Ácido acético", DEN_HARTOGH, CLEANING, 0, Some(3), -2)
        },
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-10, 11)),
            ..s.tank("DHDL2413363", "Tolueno", DEN_HARTOGH, CLEANING, -1, Some(7), -10)
        },
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-1, 6)),
            loaded_on_vehicle_at: Some(s.at(0, 8)),
            vehicle_plate: Some("PNB7C63".into()),
            exited_at: Some(s.midnight(1)),
            expected_terminal_arrival_at: Some(s.at(1, 8)),
            photo_url: Some("https://placehold.co/400x200/dc3545/white?text=Isotanque+DHDU1971099".into()),
            ..s.tank("DHDU1971099", "Etanol", DEN_HARTOGH, INSPECTION, 0, Some(1), -1)
        },
        ContainerRecord {
            unloaded_at_yard_at: Some(s.at(-7, 9)),
            ..s.tank("DHDU3012345", "Metanol", DEN_HARTOGH, INSPECTION, -7, Some(8), -7)
        },
        ContainerRecord {
            accumulated_repair_value: Some(Decimal::new(1_250_00, 2)),
            owner_operator: Some("Den Hartogh Logistics".into()),
            ..s.tank("DHDL3399881", "Ácido acético", DEN_HARTOGH, REPAIR, -5, Some(12), -15)
        },
        s.tank("DHDU4455667", "Tolueno", DEN_HARTOGH, AWAITING_ESTIMATE, -2, Some(5), -4),
        ContainerRecord {
            photo_url: Some("/docs/fotos/DHDL1122334.png".into()),
            ..s.tank("DHDL1122334", "Propilenoglicol", DEN_HARTOGH, INSPECTION, -3, Some(6), -6)
        },
        s.tank("DHDU3344556", "Ácido acético", DEN_HARTOGH, AWAITING_ESTIMATE, 0, Some(4), -2),
        ContainerRecord {
            accumulated_repair_value: Some(Decimal::new(3_480_50, 2)),
            sla_deadline: Some(s.at(10, 18)),
            ..s.tank("DHDL6677889", "Metanol", DEN_HARTOGH, REPAIR, -20, Some(15), -20)
        },
        ContainerRecord {
            exited_at: Some(s.midnight(-5)),
            ..s.tank("DHDU8899001", "Etanol", DEN_HARTOGH, OFF_HIRE, -30, None, -30)
        },
        ContainerRecord {
            booking_number: Some("BK-2026-002".into()),
            ..s.tank("EXFU5567363", "Etanol", EMPRESA_ALPHA, CLEANING, 0, Some(1), -1)
        },
        ContainerRecord {
            booking_number: Some("BK-2026-002".into()),
            ..s.tank("EXFU6422402", "Metanol", EMPRESA_ALPHA, CLEANING, -2, Some(4), -3)
        },
        ContainerRecord {
            periodic_test_due_at: Some(s.day(45)),
            ..s.tank("EXFU6632144", "Tolueno", EMPRESA_ALPHA, INSPECTION, -14, Some(14), -12)
        },
        ContainerRecord {
            accumulated_repair_value: Some(Decimal::new(890_00, 2)),
            ..s.tank("EXFU7711223", "Hexano", EMPRESA_ALPHA, REPAIR, -10, Some(21), -25)
        },
        s.tank("EXFU9988776", "Metanol", EMPRESA_ALPHA, CLEANING, 0, Some(2), -2),
        s.tank("EXFU5566778", "Tolueno", EMPRESA_ALPHA, INSPECTION, -8, Some(10), -8),
        s.tank("EXFU9900112", "Tolueno", EMPRESA_ALPHA, AWAITING_ESTIMATE, -5, Some(7), -5),
        ContainerRecord {
            booking_number: Some("BK-2026-003".into()),
            ..s.tank("SEDU8063278", "Ácido acético", QUIMICA_BETA, CLEANING, 0, None, -1)
        },
        ContainerRecord {
            exited_at: Some(s.midnight(-10)),
            ..s.tank("SEDU5544332", "Etanol", QUIMICA_BETA, OFF_HIRE, -45, None, -45)
        },
        s.tank("SEDU2233445", "Etanol", QUIMICA_BETA, CLEANING, -1, Some(3), -2),
        s.tank("SEDU7788990", "Hexano", QUIMICA_BETA, CLEANING, 0, Some(1), -1),
    ];

    for record in &mut records {
        if WITH_INSPECTION_REPORT.contains(&record.code.as_str()) {
            record.inspection_report_url = Some(format!("/docs/laudos/{}_EIR.pdf", record.code));
        }
        if WITH_CLEANING_CERTIFICATE.contains(&record.code.as_str()) {
            record.cleaning_certificate_url =
                Some(format!("/docs/certificados/{}_CleaningCertificate.pdf", record.code));
        }
    }

    records
}
