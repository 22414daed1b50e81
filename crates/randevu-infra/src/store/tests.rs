#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sea_orm::{DatabaseBackend, MockDatabase};

    use randevu_core::domain::Specialty;
    use randevu_core::ports::ReservationRepository;

    use crate::store::entity::reservation;
    use crate::store::postgres_repo::PostgresReservationRepository;

    #[tokio::test]
    async fn find_reservation_by_id_maps_the_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reservation::Model {
                id: 7,
                doctor_id: 1,
                patient_id: 2,
                reservation_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                reservation_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                status: "pending".to_owned(),
                specialty: "CARDIOLOGIST".to_owned(),
            }]])
            .into_connection();

        let repo = PostgresReservationRepository::new(db);

        let found = repo.find_by_id(7).await.unwrap().unwrap();

        assert_eq!(found.id, 7);
        assert_eq!(found.specialty, Specialty::Cardiologist);
        assert_eq!(found.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn unknown_specialty_column_value_is_a_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![reservation::Model {
                id: 1,
                doctor_id: 1,
                patient_id: 2,
                reservation_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                reservation_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                status: "pending".to_owned(),
                specialty: "DENTIST".to_owned(),
            }]])
            .into_connection();

        let repo = PostgresReservationRepository::new(db);

        assert!(repo.find_by_id(1).await.is_err());
    }
}
