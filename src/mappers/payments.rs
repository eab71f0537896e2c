use std::sync::Arc;

use crate::{
    dto::payments::{PaymentRequest, PaymentResponse},
    entity::{Address, Order, Payment, PaymentStatus},
};

use super::addresses::AddressMapper;

#[derive(Debug, Clone)]
pub struct PaymentMapper {
    addresses: Arc<AddressMapper>,
}

impl PaymentMapper {
    pub fn new(addresses: Arc<AddressMapper>) -> Self {
        Self { addresses }
    }

    pub fn to_response(&self, payment: Option<&Payment>) -> Option<PaymentResponse> {
        let payment = payment?;

        Some(PaymentResponse {
            id: payment.id,
            order_id: payment.order.as_ref().and_then(|order| order.id),
            method: payment.method.clone(),
            status: payment.status,
            amount: payment.amount,
            currency: payment.currency.clone(),
            transaction_id: payment.transaction_id.clone(),
            payment_date: payment.payment_date,
            provider: payment.provider.clone(),
            address: self.addresses.format_full_address(payment.address.as_ref()),
        })
    }

    /// A new payment always starts out [`PaymentStatus::Pending`].
    pub fn to_entity(
        &self,
        request: Option<&PaymentRequest>,
        order: Option<&Order>,
        address: Option<&Address>,
    ) -> Option<Payment> {
        if request.is_none() && order.is_none() && address.is_none() {
            return None;
        }

        let mut payment = Payment::default();

        if let Some(request) = request {
            payment.provider = request.provider.clone();
            payment.method = request.method.clone();
            payment.amount = request.amount;
            payment.currency = request.currency.clone();
        }
        payment.order = order.cloned();
        payment.address = address.cloned();
        payment.status = Some(PaymentStatus::Pending);

        Some(payment)
    }
}
