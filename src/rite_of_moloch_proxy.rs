use multiversx_sc::proxy_imports::*;

use crate::types::{Initiate, Role};

pub struct RiteOfMolochProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RiteOfMolochProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RiteOfMolochProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RiteOfMolochProxyMethods { wrapped_tx: tx }
    }
}

pub struct RiteOfMolochProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> RiteOfMolochProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<EgldOrEsdtTokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        cohort_address: Arg0,
        stake_token: Arg1,
        share_threshold: Arg2,
        minimum_stake: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&cohort_address)
            .argument(&stake_token)
            .argument(&share_threshold)
            .argument(&minimum_stake)
            .original_result()
    }
}

impl<Env, From, To, Gas> RiteOfMolochProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn grant_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("grantRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn revoke_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn has_role<
        Arg0: ProxyArg<Role>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        role: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasRole")
            .argument(&role)
            .argument(&account)
            .original_result()
    }

    pub fn set_minimum_stake<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMinimumStake")
            .argument(&amount)
            .original_result()
    }

    pub fn set_max_duration<Arg0: ProxyArg<u64>>(
        self,
        duration: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxDuration")
            .argument(&duration)
            .original_result()
    }

    pub fn minimum_stake(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("minimumStake")
            .original_result()
    }

    pub fn maximum_time(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("maximumTime")
            .original_result()
    }

    pub fn cohort_address(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("cohortAddress")
            .original_result()
    }

    pub fn stake_token(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EgldOrEsdtTokenIdentifier<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("stakeToken")
            .original_result()
    }

    pub fn share_threshold(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("shareThreshold")
            .original_result()
    }

    pub fn join_initiation<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        initiate: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("joinInitiation")
            .argument(&initiate)
            .original_result()
    }

    pub fn get_sacrifices(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue2<ManagedVec<Env::Api, ManagedAddress<Env::Api>>, ManagedVec<Env::Api, usize>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSacrifices")
            .original_result()
    }

    pub fn sacrifice<
        Arg0: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, usize>>,
    >(
        self,
        failed_initiates: Arg0,
        positions: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("sacrifice")
            .argument(&failed_initiates)
            .argument(&positions)
            .original_result()
    }

    pub fn claim_stake(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimStake")
            .original_result()
    }

    pub fn get_initiate<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Initiate<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInitiate")
            .argument(&address)
            .original_result()
    }

    pub fn initiation_start<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        initiate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("initiationStart")
            .argument(&initiate)
            .original_result()
    }

    pub fn get_initiate_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInitiateCount")
            .original_result()
    }
}
