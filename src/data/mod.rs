//! Initial collections the service starts with. The stores only require
//! an ordered collection to operate over; what seeds them is interchangeable.

use crate::entities::dish::Dish;
use crate::entities::order::{Order, OrderItem, OrderStatus};

pub fn dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: "3c637d011d844ebab1205fef8a7e36ea".into(),
            name: "Charred broccolini salad".into(),
            description: "Blistered broccolini over farro with a smoked almond dressing".into(),
            price: 11,
            image_url: "https://images.example.net/broccolini-salad.jpg".into(),
        },
        Dish {
            id: "9b5f817bba200d5e47c0c25814b0d390".into(),
            name: "Short rib ragu".into(),
            description: "Slow-braised short rib folded into pappardelle".into(),
            price: 18,
            image_url: "https://images.example.net/short-rib-ragu.jpg".into(),
        },
    ]
}

pub fn orders() -> Vec<Order> {
    vec![Order {
        id: "5a887d326e83d3c5bdcbcc1f8500d27b".into(),
        deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM 87104".into(),
        mobile_number: "(505) 143-3369".into(),
        status: OrderStatus::Pending,
        dishes: vec![OrderItem {
            dish_id: "9b5f817bba200d5e47c0c25814b0d390".into(),
            quantity: 2,
        }],
    }]
}
