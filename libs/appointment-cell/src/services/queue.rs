use std::collections::VecDeque;

use crate::models::Appointment;

/// First-in first-out appointment queue.
#[derive(Debug, Default)]
pub struct AppointmentQueue {
    appointments: VecDeque<Appointment>,
}

impl AppointmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, appointment: Appointment) {
        self.appointments.push_back(appointment);
    }

    /// Removes the oldest appointment, `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<Appointment> {
        self.appointments.pop_front()
    }

    /// Snapshot, oldest first.
    pub fn all(&self) -> Vec<Appointment> {
        self.appointments.iter().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.appointments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn appointment(appointment_id: u32) -> Appointment {
        Appointment {
            appointment_id,
            patient_id: 10001,
            patient_name: "Zara".to_string(),
            doctor_id: 2001,
            doctor_name: "Dr. Ali Khan".to_string(),
            time: "ASAP".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = AppointmentQueue::new();
        queue.enqueue(appointment(1111));
        queue.enqueue(appointment(2222));
        queue.enqueue(appointment(3333));

        let ids: Vec<u32> = queue.all().iter().map(|a| a.appointment_id).collect();
        assert_eq!(ids, vec![1111, 2222, 3333]);
        assert_eq!(queue.count(), 3);

        assert_eq!(queue.dequeue().unwrap().appointment_id, 1111);
        assert_eq!(queue.dequeue().unwrap().appointment_id, 2222);
        assert_eq!(queue.count(), 1);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = AppointmentQueue::new();
        assert!(queue.dequeue().is_none());

        queue.enqueue(appointment(1111));
        queue.dequeue();
        assert!(queue.dequeue().is_none());
        assert!(queue.all().is_empty());
    }

    #[test]
    fn test_all_is_a_snapshot() {
        let mut queue = AppointmentQueue::new();
        queue.enqueue(appointment(1111));

        let snapshot = queue.all();
        queue.enqueue(appointment(2222));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(queue.count(), 2);
    }
}
