multiversx_sc::imports!();

use crate::code_mask::COMMAND_MASK;

pub const ERR_INVALID_ROUTING_INDEX: &str = "Routing index must be between 1 and 63";

#[multiversx_sc::module]
pub trait RoutingTableModule {
    /// Points a command code at a destination. The zero address clears it.
    #[only_owner]
    #[endpoint(changeMapping)]
    fn change_mapping(&self, index: u8, address: ManagedAddress) {
        require!(
            index != 0 && index <= COMMAND_MASK,
            ERR_INVALID_ROUTING_INDEX
        );

        if address.is_zero() {
            self.routes(index).clear();
        } else {
            self.routes(index).set(&address);
        }
        self.mapping_changed_event(index, &address);
    }

    /// Destination for a command code, the zero address when unmapped.
    #[view(getAddress)]
    fn get_address(&self, index: u8) -> ManagedAddress {
        let route = self.routes(index);
        if route.is_empty() {
            ManagedAddress::zero()
        } else {
            route.get()
        }
    }

    #[storage_mapper("routes")]
    fn routes(&self, index: u8) -> SingleValueMapper<ManagedAddress>;

    #[event("mappingChanged")]
    fn mapping_changed_event(&self, #[indexed] index: u8, #[indexed] address: &ManagedAddress);
}
